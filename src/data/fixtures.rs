//! Shared test data.

pub const SAMPLE_CSV: &str = "\
Disease,Hindi Name,Marathi Name,Symptoms,Diagnosis & Tests,Risk Factors,Medical History,Ayurvedic Herbs
Hypertension,उच्च रक्तचाप,उच्च रक्तदाब,\"dizziness, high blood pressure, headache\",Blood pressure monitoring,\"Obesity, stress\",Family history of heart disease,\"Arjuna, Sarpagandha\"
Migraine,माइग्रेन,अर्धशिशी,\"throbbing headache, nausea, sensitivity to light\",Neurological examination,\"Stress, irregular sleep\",Previous head injury,\"Brahmi, Shankhpushpi\"
Common Cold,सर्दी,सर्दी,\"sneezing, runny nose, sore throat, mild fever\",Physical examination,Weak immunity,Seasonal allergies,\"Tulsi, Ginger\"
Asthma,दमा,दमा,\"wheezing, shortness of breath, chest tightness\",Spirometry,\"Smoking, pollution\",Childhood allergies,\"Vasaka, Pippali\"
Hypertension,उच्च रक्तचाप,उच्च रक्तदाब,\"elevated blood pressure, fatigue\",ECG,Salt intake,Kidney disease,Punarnava
,,,orphan symptoms,,,,
";

pub const SAMPLE_MEDICINES: &str = r#"[
  {
    "id": "m1",
    "name": "Paracetamol 500",
    "composition": "Paracetamol (500mg)",
    "uses": ["fever", "mild pain"],
    "side_effects": ["nausea"],
    "price": "₹20",
    "manufacturer": "Generic Labs",
    "type": "Tablet",
    "dosage": "1 tablet every 6 hours",
    "description": "Analgesic and antipyretic."
  },
  {
    "id": "m2",
    "name": "Ibuprofen 400",
    "composition": "Ibuprofen (400mg)",
    "uses": ["inflammation", "pain"],
    "side_effects": ["stomach upset"],
    "price": "₹35",
    "manufacturer": "Generic Labs",
    "type": "Tablet",
    "dosage": "1 tablet every 8 hours",
    "description": "Non-steroidal anti-inflammatory drug."
  },
  {
    "id": "m3",
    "name": "Cetirizine",
    "composition": "Cetirizine Hydrochloride (10mg)",
    "uses": ["allergy", "runny nose"],
    "side_effects": ["drowsiness"],
    "price": "₹18",
    "manufacturer": "Allergo",
    "type": "Tablet",
    "dosage": "1 tablet daily",
    "description": "Antihistamine."
  },
  {
    "id": "m4",
    "name": "Dolo 650",
    "composition": "Paracetamol (650mg)",
    "uses": ["fever", "body ache"],
    "side_effects": [],
    "price": "₹30",
    "manufacturer": "Micro Labs",
    "type": "Tablet",
    "dosage": "1 tablet every 6 hours",
    "description": "Higher strength paracetamol."
  },
  {
    "id": "m5",
    "name": "Sinarest Cold",
    "composition": "Paracetamol, Phenylephrine, Chlorpheniramine",
    "uses": ["cold"],
    "side_effects": ["drowsiness"],
    "price": "₹45",
    "manufacturer": "Centaur",
    "type": "Tablet",
    "dosage": "1 tablet twice daily",
    "description": "Combination cold relief."
  }
]"#;

pub const SAMPLE_SYMPTOMS: &str = r#"[
  { "symptom": "headache", "medicine_ids": ["m1", "m2"] },
  { "symptom": "sneezing", "medicine_ids": ["m3"] },
  { "symptom": "cold", "medicine_ids": ["m3"] },
  { "symptom": "", "medicine_ids": ["m4"] }
]"#;
