use crate::domain::model::GeneOrthologRecord;
use crate::utils::error::Result;
use std::io::Read;

pub const CSV_HEADER: [&str; 4] = ["sparrow", "butterfly", "identity", "category"];

/// 依宣告順序排列的同源基因表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrthologTable {
    records: Vec<GeneOrthologRecord>,
}

impl OrthologTable {
    pub fn new(records: Vec<GeneOrthologRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GeneOrthologRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneOrthologRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        // 空表也要有標題列，所以不依賴 serde 自動產生
        writer.write_record(CSV_HEADER)?;
        for record in &self.records {
            writer.serialize(record)?;
        }

        writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let records = reader
            .deserialize::<GeneOrthologRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }
}

impl From<Vec<GeneOrthologRecord>> for OrthologTable {
    fn from(records: Vec<GeneOrthologRecord>) -> Self {
        Self::new(records)
    }
}
