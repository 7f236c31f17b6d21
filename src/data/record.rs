use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::utils::safe_truncate_ellipsis;

/// Column names of the remedy dataset, spelled exactly as they appear in the
/// CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum RecordField {
    #[strum(serialize = "Disease")]
    Disease,
    #[strum(serialize = "Hindi Name")]
    HindiName,
    #[strum(serialize = "Marathi Name")]
    MarathiName,
    #[strum(serialize = "Symptoms")]
    Symptoms,
    #[strum(serialize = "Diagnosis & Tests")]
    DiagnosisAndTests,
    #[strum(serialize = "Symptom Severity")]
    SymptomSeverity,
    #[strum(serialize = "Duration of Treatment")]
    DurationOfTreatment,
    #[strum(serialize = "Medical History")]
    MedicalHistory,
    #[strum(serialize = "Current Medications")]
    CurrentMedications,
    #[strum(serialize = "Risk Factors")]
    RiskFactors,
    #[strum(serialize = "Environmental Factors")]
    EnvironmentalFactors,
    #[strum(serialize = "Sleep Patterns")]
    SleepPatterns,
    #[strum(serialize = "Stress Levels")]
    StressLevels,
    #[strum(serialize = "Physical Activity Levels")]
    PhysicalActivityLevels,
    #[strum(serialize = "Family History")]
    FamilyHistory,
    #[strum(serialize = "Dietary Habits")]
    DietaryHabits,
    #[strum(serialize = "Allergies (Food/Env)")]
    Allergies,
    #[strum(serialize = "Seasonal Variation")]
    SeasonalVariation,
    #[strum(serialize = "Age Group")]
    AgeGroup,
    #[strum(serialize = "Gender")]
    Gender,
    #[strum(serialize = "Occupation and Lifestyle")]
    OccupationAndLifestyle,
    #[strum(serialize = "Cultural Preferences")]
    CulturalPreferences,
    #[strum(serialize = "Herbal/Alternative Remedies")]
    HerbalRemedies,
    #[strum(serialize = "Ayurvedic Herbs")]
    AyurvedicHerbs,
    #[strum(serialize = "Formulation")]
    Formulation,
    #[strum(serialize = "Doshas")]
    Doshas,
    #[strum(serialize = "Constitution/Prakriti")]
    Prakriti,
    #[strum(serialize = "Diet and Lifestyle Recommendations")]
    DietAndLifestyle,
    #[strum(serialize = "Yoga & Physical Therapy")]
    YogaAndTherapy,
    #[strum(serialize = "Medical Intervention")]
    MedicalIntervention,
    #[strum(serialize = "Prevention")]
    Prevention,
    #[strum(serialize = "Prognosis")]
    Prognosis,
    #[strum(serialize = "Complications")]
    Complications,
    #[strum(serialize = "Patient Recommendations")]
    PatientRecommendations,
}

impl RecordField {
    pub fn column(self) -> &'static str {
        self.into()
    }
}

/// One row of the remedy dataset. Every column is kept as text; a missing
/// column or a short row leaves the field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Hindi Name")]
    pub hindi_name: String,
    #[serde(rename = "Marathi Name")]
    pub marathi_name: String,
    #[serde(rename = "Symptoms")]
    pub symptoms: String,
    #[serde(rename = "Diagnosis & Tests")]
    pub diagnosis_and_tests: String,
    #[serde(rename = "Symptom Severity")]
    pub symptom_severity: String,
    #[serde(rename = "Duration of Treatment")]
    pub duration_of_treatment: String,
    #[serde(rename = "Medical History")]
    pub medical_history: String,
    #[serde(rename = "Current Medications")]
    pub current_medications: String,
    #[serde(rename = "Risk Factors")]
    pub risk_factors: String,
    #[serde(rename = "Environmental Factors")]
    pub environmental_factors: String,
    #[serde(rename = "Sleep Patterns")]
    pub sleep_patterns: String,
    #[serde(rename = "Stress Levels")]
    pub stress_levels: String,
    #[serde(rename = "Physical Activity Levels")]
    pub physical_activity_levels: String,
    #[serde(rename = "Family History")]
    pub family_history: String,
    #[serde(rename = "Dietary Habits")]
    pub dietary_habits: String,
    #[serde(rename = "Allergies (Food/Env)")]
    pub allergies: String,
    #[serde(rename = "Seasonal Variation")]
    pub seasonal_variation: String,
    #[serde(rename = "Age Group")]
    pub age_group: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Occupation and Lifestyle")]
    pub occupation_and_lifestyle: String,
    #[serde(rename = "Cultural Preferences")]
    pub cultural_preferences: String,
    #[serde(rename = "Herbal/Alternative Remedies")]
    pub herbal_remedies: String,
    #[serde(rename = "Ayurvedic Herbs")]
    pub ayurvedic_herbs: String,
    #[serde(rename = "Formulation")]
    pub formulation: String,
    #[serde(rename = "Doshas")]
    pub doshas: String,
    #[serde(rename = "Constitution/Prakriti")]
    pub prakriti: String,
    #[serde(rename = "Diet and Lifestyle Recommendations")]
    pub diet_and_lifestyle: String,
    #[serde(rename = "Yoga & Physical Therapy")]
    pub yoga_and_therapy: String,
    #[serde(rename = "Medical Intervention")]
    pub medical_intervention: String,
    #[serde(rename = "Prevention")]
    pub prevention: String,
    #[serde(rename = "Prognosis")]
    pub prognosis: String,
    #[serde(rename = "Complications")]
    pub complications: String,
    #[serde(rename = "Patient Recommendations")]
    pub patient_recommendations: String,
}

impl Record {
    pub fn new(disease: &str, symptoms: &str) -> Self {
        Self {
            disease: disease.to_string(),
            symptoms: symptoms.to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::Disease => &self.disease,
            RecordField::HindiName => &self.hindi_name,
            RecordField::MarathiName => &self.marathi_name,
            RecordField::Symptoms => &self.symptoms,
            RecordField::DiagnosisAndTests => &self.diagnosis_and_tests,
            RecordField::SymptomSeverity => &self.symptom_severity,
            RecordField::DurationOfTreatment => &self.duration_of_treatment,
            RecordField::MedicalHistory => &self.medical_history,
            RecordField::CurrentMedications => &self.current_medications,
            RecordField::RiskFactors => &self.risk_factors,
            RecordField::EnvironmentalFactors => &self.environmental_factors,
            RecordField::SleepPatterns => &self.sleep_patterns,
            RecordField::StressLevels => &self.stress_levels,
            RecordField::PhysicalActivityLevels => &self.physical_activity_levels,
            RecordField::FamilyHistory => &self.family_history,
            RecordField::DietaryHabits => &self.dietary_habits,
            RecordField::Allergies => &self.allergies,
            RecordField::SeasonalVariation => &self.seasonal_variation,
            RecordField::AgeGroup => &self.age_group,
            RecordField::Gender => &self.gender,
            RecordField::OccupationAndLifestyle => &self.occupation_and_lifestyle,
            RecordField::CulturalPreferences => &self.cultural_preferences,
            RecordField::HerbalRemedies => &self.herbal_remedies,
            RecordField::AyurvedicHerbs => &self.ayurvedic_herbs,
            RecordField::Formulation => &self.formulation,
            RecordField::Doshas => &self.doshas,
            RecordField::Prakriti => &self.prakriti,
            RecordField::DietAndLifestyle => &self.diet_and_lifestyle,
            RecordField::YogaAndTherapy => &self.yoga_and_therapy,
            RecordField::MedicalIntervention => &self.medical_intervention,
            RecordField::Prevention => &self.prevention,
            RecordField::Prognosis => &self.prognosis,
            RecordField::Complications => &self.complications,
            RecordField::PatientRecommendations => &self.patient_recommendations,
        }
    }

    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    fn field_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::Disease => &mut self.disease,
            RecordField::HindiName => &mut self.hindi_name,
            RecordField::MarathiName => &mut self.marathi_name,
            RecordField::Symptoms => &mut self.symptoms,
            RecordField::DiagnosisAndTests => &mut self.diagnosis_and_tests,
            RecordField::SymptomSeverity => &mut self.symptom_severity,
            RecordField::DurationOfTreatment => &mut self.duration_of_treatment,
            RecordField::MedicalHistory => &mut self.medical_history,
            RecordField::CurrentMedications => &mut self.current_medications,
            RecordField::RiskFactors => &mut self.risk_factors,
            RecordField::EnvironmentalFactors => &mut self.environmental_factors,
            RecordField::SleepPatterns => &mut self.sleep_patterns,
            RecordField::StressLevels => &mut self.stress_levels,
            RecordField::PhysicalActivityLevels => &mut self.physical_activity_levels,
            RecordField::FamilyHistory => &mut self.family_history,
            RecordField::DietaryHabits => &mut self.dietary_habits,
            RecordField::Allergies => &mut self.allergies,
            RecordField::SeasonalVariation => &mut self.seasonal_variation,
            RecordField::AgeGroup => &mut self.age_group,
            RecordField::Gender => &mut self.gender,
            RecordField::OccupationAndLifestyle => &mut self.occupation_and_lifestyle,
            RecordField::CulturalPreferences => &mut self.cultural_preferences,
            RecordField::HerbalRemedies => &mut self.herbal_remedies,
            RecordField::AyurvedicHerbs => &mut self.ayurvedic_herbs,
            RecordField::Formulation => &mut self.formulation,
            RecordField::Doshas => &mut self.doshas,
            RecordField::Prakriti => &mut self.prakriti,
            RecordField::DietAndLifestyle => &mut self.diet_and_lifestyle,
            RecordField::YogaAndTherapy => &mut self.yoga_and_therapy,
            RecordField::MedicalIntervention => &mut self.medical_intervention,
            RecordField::Prevention => &mut self.prevention,
            RecordField::Prognosis => &mut self.prognosis,
            RecordField::Complications => &mut self.complications,
            RecordField::PatientRecommendations => &mut self.patient_recommendations,
        }
    }

    pub fn summary(&self, max_chars: usize) -> String {
        if self.symptoms.is_empty() {
            return self.disease.clone();
        }
        format!("{}: {}", self.disease, safe_truncate_ellipsis(&self.symptoms, max_chars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_names_round_trip_through_strum() {
        assert_eq!(RecordField::from_str("Hindi Name").unwrap(), RecordField::HindiName);
        assert_eq!(RecordField::DiagnosisAndTests.column(), "Diagnosis & Tests");
        assert!(RecordField::from_str("Unknown Column").is_err());
    }

    #[test]
    fn test_every_field_is_addressable() {
        let record = Record::new("Hypertension", "headache");
        assert_eq!(RecordField::iter().count(), 34);
        assert_eq!(record.get(RecordField::Disease), "Hypertension");
        assert_eq!(record.get(RecordField::Symptoms), "headache");
        assert_eq!(record.get(RecordField::Prognosis), "");
    }

    #[test]
    fn test_set_writes_the_named_column() {
        let mut record = Record::default();
        record.set(RecordField::MarathiName, "दमा");
        record.set(RecordField::Allergies, "pollen");
        assert_eq!(record.marathi_name, "दमा");
        assert_eq!(record.get(RecordField::Allergies), "pollen");
    }

    #[test]
    fn test_summary_truncates_symptoms() {
        let record = Record::new("Migraine", "throbbing headache, nausea");
        assert_eq!(record.summary(8), "Migraine: throbbin...");
        assert_eq!(Record::new("Migraine", "").summary(8), "Migraine");
    }
}
