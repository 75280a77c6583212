use crate::domain::model::GeneOrthologRecord;

/// Flight-related candidate pairs used when no dataset file is given.
pub fn seed_records() -> Vec<GeneOrthologRecord> {
    vec![
        GeneOrthologRecord::new("MYH7", "Mhc", 87.5, "muscle"),
        GeneOrthologRecord::new("FOXP2", "FoxP", 65.8, "neural"),
        GeneOrthologRecord::new("CRY1", "Cry", 71.2, "circadian"),
    ]
}
