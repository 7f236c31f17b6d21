use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::core::error::Result;
use crate::data::{Medicine, MedicineCatalog, MedicineStore};

/// Coarse medicine lookup used to ground the assistant's answers.
///
/// Candidates come from name/composition containment (pass A) and from
/// symptom mappings whose symptom appears inside the query (pass B). Only if
/// both are empty are medicine `uses` tried (pass C). Results keep catalog
/// order; there is no ranking.
pub struct MedicineRetriever {
    store: Arc<MedicineStore>,
}

impl MedicineRetriever {
    pub fn new(store: Arc<MedicineStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<MedicineStore> {
        &self.store
    }

    pub async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<Medicine>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let catalog = self.store.load().await?;
        let ids = candidate_ids(&catalog, &query);

        let results: Vec<Medicine> = catalog
            .medicines
            .iter()
            .filter(|m| ids.contains(m.id.as_str()))
            .take(limit)
            .cloned()
            .collect();

        debug!("Medicine lookup '{}': {} candidates, {} returned", query, ids.len(), results.len());
        Ok(results)
    }
}

fn candidate_ids<'a>(catalog: &'a MedicineCatalog, query: &str) -> HashSet<&'a str> {
    let mut ids = HashSet::new();

    for medicine in &catalog.medicines {
        if medicine.name.to_lowercase().contains(query)
            || medicine.composition.to_lowercase().contains(query)
        {
            ids.insert(medicine.id.as_str());
        }
    }

    for mapping in &catalog.symptoms {
        let symptom = mapping.symptom.trim().to_lowercase();
        if !symptom.is_empty() && query.contains(&symptom) {
            ids.extend(mapping.medicine_ids.iter().map(String::as_str));
        }
    }

    if ids.is_empty() {
        for medicine in &catalog.medicines {
            let uses_match = medicine.uses.iter().any(|u| {
                let u = u.trim().to_lowercase();
                !u.is_empty() && query.contains(&u)
            });
            if uses_match {
                ids.insert(medicine.id.as_str());
            }
        }
    }

    ids
}

/// Pretty JSON block the assistant prompt embeds as its grounding context.
pub fn render_context(medicines: &[Medicine]) -> Result<String> {
    Ok(serde_json::to_string_pretty(medicines)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AyurgenixError;
    use crate::data::fixtures::{SAMPLE_MEDICINES, SAMPLE_SYMPTOMS};

    fn retriever() -> MedicineRetriever {
        MedicineRetriever::new(Arc::new(MedicineStore::from_json(SAMPLE_MEDICINES, SAMPLE_SYMPTOMS)))
    }

    fn ids(medicines: &[Medicine]) -> Vec<&str> {
        medicines.iter().map(|m| m.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_symptom_mapping_pass() {
        let results = retriever().retrieve("headache", 5).await.unwrap();
        assert_eq!(ids(&results), vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_symptom_contained_in_longer_query() {
        let results = retriever().retrieve("Constant sneezing since morning", 5).await.unwrap();
        assert_eq!(ids(&results), vec!["m3"]);
    }

    #[tokio::test]
    async fn test_name_and_composition_pass() {
        let retriever = retriever();
        assert_eq!(ids(&retriever.retrieve("Dolo", 5).await.unwrap()), vec!["m4"]);
        assert_eq!(ids(&retriever.retrieve("paracetamol", 5).await.unwrap()), vec!["m1", "m4", "m5"]);
    }

    #[tokio::test]
    async fn test_passes_a_and_b_are_unioned_in_catalog_order() {
        // Pass A finds m5 by name, pass B maps "cold" to m3.
        let results = retriever().retrieve("Cold", 5).await.unwrap();
        assert_eq!(ids(&results), vec!["m3", "m5"]);
    }

    #[tokio::test]
    async fn test_uses_fallback_only_when_nothing_else_matched() {
        let retriever = retriever();
        assert_eq!(ids(&retriever.retrieve("I have a fever", 5).await.unwrap()), vec!["m1", "m4"]);
        // Pass B matched, so m4's "fever" use is never consulted.
        assert_eq!(ids(&retriever.retrieve("headache with fever", 5).await.unwrap()), vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_limit_and_empty_query() {
        let retriever = retriever();
        assert_eq!(retriever.retrieve("headache", 1).await.unwrap().len(), 1);
        assert!(retriever.retrieve("headache", 0).await.unwrap().is_empty());
        assert!(retriever.retrieve("   ", 5).await.unwrap().is_empty());
        assert!(retriever.retrieve("unrelated words", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_catalog_propagates() {
        let retriever = MedicineRetriever::new(Arc::new(MedicineStore::from_paths(
            "/nonexistent/medicines.json",
            "/nonexistent/symptoms.json",
        )));
        assert!(matches!(retriever.retrieve("fever", 5).await, Err(AyurgenixError::DataLoad(_))));
    }

    #[tokio::test]
    async fn test_render_context() {
        let results = retriever().retrieve("sneezing", 5).await.unwrap();
        let context = render_context(&results).unwrap();
        assert!(context.contains("\"name\": \"Cetirizine\""));
        assert!(context.contains("\"type\": \"Tablet\""));
    }
}
