//! Document type - the parsed output of one legacy spreadsheet file.

use crate::encryption::EncryptionState;
use crate::error::{Error, Result};
use crate::link::LinkPool;
use crate::name_pool::NamePool;
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// Which on-disk format a document was decoded from.
///
/// Chart data for a document is not owned by `Document` itself: it is
/// assembled by the family crate that parsed the file (which depends on
/// both `duke-sheets-core` and `duke-sheets-chart`) and carried alongside
/// the `Document` by the caller, the same way a formula cell's raw bytes are
/// decoded by `duke-sheets-formula` rather than by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Wk1,
    Wk3,
    Wk4,
    Wk123,
    MacWk,
    MultiplanV1,
    MultiplanV2,
    MultiplanV3,
}

/// The complete parsed representation of one input file: an ordered list of
/// sheets plus the workbook-wide pools and state every family crate
/// populates while parsing.
///
/// Unlike the teacher's `Workbook`, a `Document` is build-once: it is
/// assembled by a parser, not mutated afterward by callers, so there is no
/// `add_sheet`/`rename_sheet` API - only the read accessors a consumer
/// needs to walk the parsed structure.
#[derive(Debug)]
pub struct Document {
    sheets: Vec<Sheet>,
    active_sheet: usize,
    format: FileFormat,
    names: NamePool,
    links: LinkPool,
    encryption: EncryptionState,
    settings: DocumentSettings,
}

impl Document {
    /// An empty document of the given format, with no sheets.
    pub fn new(format: FileFormat) -> Self {
        Self {
            sheets: Vec::new(),
            active_sheet: 0,
            format,
            names: NamePool::new(),
            links: LinkPool::new(),
            encryption: EncryptionState::none(),
            settings: DocumentSettings::default(),
        }
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name() == name)
    }

    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    pub fn sheets_mut(&mut self) -> impl Iterator<Item = &mut Sheet> {
        self.sheets.iter_mut()
    }

    /// Append a sheet, validating its name is non-empty, within the legacy
    /// name-length limit, and not a duplicate of an existing sheet.
    pub fn push_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        self.validate_sheet_name(sheet.name())?;
        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    pub fn active_sheet(&self) -> usize {
        self.active_sheet
    }

    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        self.active_sheet = index;
        Ok(())
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut DocumentSettings {
        &mut self.settings
    }

    pub fn names(&self) -> &NamePool {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut NamePool {
        &mut self.names
    }

    pub fn links(&self) -> &LinkPool {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut LinkPool {
        &mut self.links
    }

    pub fn encryption(&self) -> &EncryptionState {
        &self.encryption
    }

    pub fn set_encryption(&mut self, encryption: EncryptionState) {
        self.encryption = encryption;
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("sheet name cannot be empty".into()));
        }
        if name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        let name_lower = name.to_lowercase();
        if self.sheets.iter().any(|s| s.name().to_lowercase() == name_lower) {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

/// Document-wide settings recorded from the source file's header.
#[derive(Debug, Clone)]
pub struct DocumentSettings {
    /// Date system: `false` = 1900 epoch, `true` = 1904 epoch.
    pub date_1904: bool,
    /// Whether the file declared itself protected (distinct from password
    /// encryption, which is tracked by [`EncryptionState`]).
    pub protected: bool,
    /// Recalculate formulas automatically on open.
    pub calc_on_open: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            date_1904: false,
            protected: false,
            calc_on_open: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_no_sheets() {
        let doc = Document::new(FileFormat::Wk1);
        assert_eq!(doc.sheet_count(), 0);
        assert_eq!(doc.format(), FileFormat::Wk1);
    }

    #[test]
    fn push_sheet_rejects_duplicate_names() {
        let mut doc = Document::new(FileFormat::Wk3);
        doc.push_sheet(Sheet::new("Sheet1")).unwrap();
        assert!(doc.push_sheet(Sheet::new("SHEET1")).is_err());
    }

    #[test]
    fn active_sheet_must_be_in_range() {
        let mut doc = Document::new(FileFormat::MultiplanV2);
        doc.push_sheet(Sheet::new("Main")).unwrap();
        assert!(doc.set_active_sheet(0).is_ok());
        assert!(doc.set_active_sheet(1).is_err());
    }

    #[test]
    fn sheet_lookup_by_name() {
        let mut doc = Document::new(FileFormat::Wk4);
        doc.push_sheet(Sheet::new("Budget")).unwrap();
        doc.push_sheet(Sheet::new("Notes")).unwrap();

        assert_eq!(doc.sheet_index("Notes"), Some(1));
        assert!(doc.sheet_by_name("Missing").is_none());
    }
}
