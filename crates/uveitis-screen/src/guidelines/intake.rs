//! Answer checks performed before a guideline is evaluated.
//!
//! Evaluators trust their input apart from the two dates. Callers collecting
//! answers from people run them through [`validate_answers`] first so that
//! every declared question is answered from the guideline's own options.

use super::domain::{PatientRecord, QuestionKey};
use super::GuidelineDefinition;
use crate::dates::parse_date;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{} is required", .0.label())]
    Missing(QuestionKey),
    #[error("{} must use DD/MM/YYYY and be a real calendar date, got '{value}'", .question.label())]
    InvalidDate {
        question: QuestionKey,
        value: String,
    },
    #[error("{} cannot be after {today}", .question.label())]
    FutureDate {
        question: QuestionKey,
        today: NaiveDate,
    },
    #[error("date of diagnosis {diagnosis} is before date of birth {birth}")]
    DiagnosisBeforeBirth {
        birth: NaiveDate,
        diagnosis: NaiveDate,
    },
    #[error("'{value}' is not a {} option for the {guideline}", .question.label())]
    UnsupportedOption {
        question: QuestionKey,
        value: String,
        guideline: &'static str,
    },
}

/// Checks that `patient` answers every question `definition` asks.
pub fn validate_answers(
    definition: &GuidelineDefinition,
    patient: &PatientRecord,
    today: NaiveDate,
) -> Result<(), IntakeError> {
    let birth = checked_date(QuestionKey::DateOfBirth, &patient.date_of_birth, today)?;
    let diagnosis = checked_date(
        QuestionKey::DateOfDiagnosis,
        &patient.date_of_diagnosis,
        today,
    )?;
    if diagnosis < birth {
        return Err(IntakeError::DiagnosisBeforeBirth { birth, diagnosis });
    }

    if definition.asks(QuestionKey::SubDiagnosis) {
        require_option(
            definition,
            QuestionKey::SubDiagnosis,
            &patient.sub_diagnosis,
            definition.sub_diagnosis_options,
        )?;
    }

    if definition.asks(QuestionKey::BiologicalTreatment) {
        let answer = patient.biological_treatment.as_deref().unwrap_or_default();
        let options = definition.biological_treatment_options.unwrap_or_default();
        require_option(
            definition,
            QuestionKey::BiologicalTreatment,
            answer,
            options,
        )?;
    }

    Ok(())
}

fn checked_date(
    question: QuestionKey,
    raw: &str,
    today: NaiveDate,
) -> Result<NaiveDate, IntakeError> {
    if raw.trim().is_empty() {
        return Err(IntakeError::Missing(question));
    }
    let date = parse_date(raw).ok_or_else(|| IntakeError::InvalidDate {
        question,
        value: raw.to_string(),
    })?;
    if date > today {
        return Err(IntakeError::FutureDate { question, today });
    }
    Ok(date)
}

fn require_option(
    definition: &GuidelineDefinition,
    question: QuestionKey,
    answer: &str,
    options: &[&str],
) -> Result<(), IntakeError> {
    if answer.trim().is_empty() {
        return Err(IntakeError::Missing(question));
    }
    if options.contains(&answer) {
        Ok(())
    } else {
        Err(IntakeError::UnsupportedOption {
            question,
            value: answer.to_string(),
            guideline: definition.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::{get_guideline, GuidelineKey};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    fn nordic_patient() -> PatientRecord {
        PatientRecord {
            date_of_birth: "14/03/2015".to_string(),
            date_of_diagnosis: "02/09/2019".to_string(),
            sub_diagnosis: "Oligoarthritis".to_string(),
            ana_positive: true,
            on_methotrexate: false,
            biological_treatment: Some("Adalimumab".to_string()),
        }
    }

    #[test]
    fn accepts_complete_answers() {
        let definition = get_guideline(GuidelineKey::Nordic).definition();
        assert_eq!(
            validate_answers(definition, &nordic_patient(), today()),
            Ok(())
        );
    }

    #[test]
    fn requires_biological_treatment_only_where_asked() {
        let mut patient = nordic_patient();
        patient.biological_treatment = None;

        let nordic = get_guideline(GuidelineKey::Nordic).definition();
        assert_eq!(
            validate_answers(nordic, &patient, today()),
            Err(IntakeError::Missing(QuestionKey::BiologicalTreatment))
        );

        patient.sub_diagnosis = "Juvenile Idiopathic Arthritis".to_string();
        let miwguc = get_guideline(GuidelineKey::Miwguc).definition();
        assert_eq!(validate_answers(miwguc, &patient, today()), Ok(()));
    }

    #[test]
    fn rejects_sub_diagnosis_from_another_guideline() {
        let mut patient = nordic_patient();
        patient.sub_diagnosis = "HLAB27+ Arthritis".to_string();
        let definition = get_guideline(GuidelineKey::Nordic).definition();

        assert_eq!(
            validate_answers(definition, &patient, today()),
            Err(IntakeError::UnsupportedOption {
                question: QuestionKey::SubDiagnosis,
                value: "HLAB27+ Arthritis".to_string(),
                guideline: "Nordic Guidelines",
            })
        );
    }

    #[test]
    fn rejects_diagnosis_before_birth() {
        let mut patient = nordic_patient();
        patient.date_of_diagnosis = "01/01/2014".to_string();
        let definition = get_guideline(GuidelineKey::Nordic).definition();

        assert!(matches!(
            validate_answers(definition, &patient, today()),
            Err(IntakeError::DiagnosisBeforeBirth { .. })
        ));
    }

    #[test]
    fn rejects_future_and_malformed_dates() {
        let definition = get_guideline(GuidelineKey::Uk).definition();
        let mut patient = nordic_patient();
        patient.sub_diagnosis = "Persistent Oligoarthritis".to_string();

        patient.date_of_diagnosis = "02/06/2025".to_string();
        assert!(matches!(
            validate_answers(definition, &patient, today()),
            Err(IntakeError::FutureDate {
                question: QuestionKey::DateOfDiagnosis,
                ..
            })
        ));

        patient.date_of_birth = "31/02/2015".to_string();
        assert!(matches!(
            validate_answers(definition, &patient, today()),
            Err(IntakeError::InvalidDate {
                question: QuestionKey::DateOfBirth,
                ..
            })
        ));

        patient.date_of_birth = String::new();
        assert_eq!(
            validate_answers(definition, &patient, today()),
            Err(IntakeError::Missing(QuestionKey::DateOfBirth))
        );
    }

    #[test]
    fn error_messages_use_question_labels() {
        let err = IntakeError::Missing(QuestionKey::SubDiagnosis);
        assert_eq!(err.to_string(), "Sub-diagnosis of Arthritis is required");
    }
}
