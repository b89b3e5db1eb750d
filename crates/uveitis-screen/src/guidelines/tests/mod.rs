mod common;

mod dispatch;
mod miwguc;
