//! Phase document storage API.

use crate::StoreResult;
use crate::manifest::RunManifest;
use eq_phases::{PhaseCategory, PhaseDocument, PhaseDocuments};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Writes assembled documents under one output directory.
#[derive(Clone)]
pub struct PhaseStore {
    out_dir: PathBuf,
}

/// Paths written by [`PhaseStore::save_documents`], keyed by category.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedDocuments {
    pub salt: PathBuf,
    pub gas: PathBuf,
    pub solid: PathBuf,
}

impl SavedDocuments {
    pub fn for_category(&self, category: PhaseCategory) -> &Path {
        match category {
            PhaseCategory::Salt => &self.salt,
            PhaseCategory::Gas => &self.gas,
            PhaseCategory::Solid => &self.solid,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PhaseCategory, &Path)> {
        PhaseCategory::ALL
            .into_iter()
            .map(|category| (category, self.for_category(category)))
    }
}

impl PhaseStore {
    pub fn new(out_dir: PathBuf) -> StoreResult<Self> {
        if !out_dir.exists() {
            fs::create_dir_all(&out_dir)?;
        }
        Ok(Self { out_dir })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn document_path(&self, category: PhaseCategory) -> PathBuf {
        self.out_dir.join(category.output_file())
    }

    /// Write all three documents as pretty-printed UTF-8 JSON.
    ///
    /// Writes are independent; a failure leaves earlier files in place.
    pub fn save_documents(&self, documents: &PhaseDocuments) -> StoreResult<SavedDocuments> {
        let salt = self.save_document(PhaseCategory::Salt, &documents.salt)?;
        let gas = self.save_document(PhaseCategory::Gas, &documents.gas)?;
        let solid = self.save_document(PhaseCategory::Solid, &documents.solid)?;
        Ok(SavedDocuments { salt, gas, solid })
    }

    fn save_document(
        &self,
        category: PhaseCategory,
        document: &PhaseDocument,
    ) -> StoreResult<PathBuf> {
        let path = self.document_path(category);
        let document_json = serde_json::to_string_pretty(document)?;
        fs::write(&path, document_json)?;
        Ok(path)
    }

    pub fn load_document(&self, category: PhaseCategory) -> StoreResult<PhaseDocument> {
        let path = self.document_path(category);
        let content = fs::read_to_string(path)?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }

    pub fn save_manifest(&self, manifest: &RunManifest) -> StoreResult<PathBuf> {
        let path = self.out_dir.join(MANIFEST_FILE_NAME);
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(&path, manifest_json)?;
        Ok(path)
    }

    pub fn load_manifest(&self) -> StoreResult<RunManifest> {
        let content = fs::read_to_string(self.out_dir.join(MANIFEST_FILE_NAME))?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }
}
