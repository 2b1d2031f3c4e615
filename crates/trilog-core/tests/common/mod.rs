use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use trilog_core::errors::{Result, TrilogError};
use trilog_core::{
    DatasetDescription, DatasetKind, Domain, FieldSpec, FieldType, GisToolkit, LoggerConfig,
    MemoryConsole, MultiSinkLogger,
};

/// Logger over a fresh temp directory with a recording console
#[allow(dead_code)]
pub fn temp_logger(dir: &TempDir, log_enabled: bool) -> MultiSinkLogger<MemoryConsole> {
    let cfg = LoggerConfig::new(
        dir.path().join("report.txt"),
        dir.path().join("log.txt"),
        log_enabled,
    );
    MultiSinkLogger::new(cfg, MemoryConsole::new())
}

/// File contents, or None if the file was never created
#[allow(dead_code)]
pub fn read_opt(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// In-memory stand-in for a GIS toolkit binding
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeToolkit {
    pub workspace: Option<String>,
    /// workspace -> dataset name -> kind
    pub datasets: BTreeMap<String, BTreeMap<String, DatasetKind>>,
    /// table -> ordered (field name, type)
    pub fields: BTreeMap<String, Vec<(String, FieldType)>>,
    pub added: Vec<(String, FieldSpec)>,
    pub calculations: Vec<(String, String, String)>,
    pub fail_delete: Option<String>,
    pub fail_set_workspace_to: Option<String>,
    pub workspace_history: Vec<Option<String>>,
    /// dataset or layer name -> description
    pub descriptions: BTreeMap<String, DatasetDescription>,
    /// geodatabase -> domains
    pub domains: BTreeMap<String, Vec<Domain>>,
    pub created_domains: Vec<(String, Domain)>,
}

#[allow(dead_code)]
impl FakeToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace(mut self, ws: &str) -> Self {
        self.workspace = Some(ws.to_string());
        self
    }

    pub fn with_dataset(mut self, ws: &str, name: &str, kind: DatasetKind) -> Self {
        self.datasets
            .entry(ws.to_string())
            .or_default()
            .insert(name.to_string(), kind);
        self
    }

    pub fn with_field(mut self, table: &str, name: &str, field_type: FieldType) -> Self {
        self.fields
            .entry(table.to_string())
            .or_default()
            .push((name.to_string(), field_type));
        self
    }

    pub fn with_description(mut self, name: &str, description: DatasetDescription) -> Self {
        self.descriptions.insert(name.to_string(), description);
        self
    }

    pub fn with_domain(mut self, geodatabase: &str, domain: Domain) -> Self {
        self.domains
            .entry(geodatabase.to_string())
            .or_default()
            .push(domain);
        self
    }

    pub fn datasets_in(&self, ws: &str) -> Vec<String> {
        self.datasets
            .get(ws)
            .map(|d| d.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl GisToolkit for FakeToolkit {
    fn workspace(&self) -> Option<String> {
        self.workspace.clone()
    }

    fn set_workspace(&mut self, workspace: Option<String>) -> Result<()> {
        if workspace.is_some() && workspace == self.fail_set_workspace_to {
            return Err(TrilogError::toolkit("set_workspace", "workspace unavailable"));
        }
        self.workspace_history.push(workspace.clone());
        self.workspace = workspace;
        Ok(())
    }

    fn list_datasets(&self, kind: DatasetKind) -> Result<Vec<String>> {
        let ws = self
            .workspace
            .as_ref()
            .ok_or_else(|| TrilogError::toolkit("list_datasets", "no workspace set"))?;
        Ok(self
            .datasets
            .get(ws)
            .map(|d| {
                d.iter()
                    .filter(|(_, k)| **k == kind)
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn delete_dataset(&mut self, name: &str) -> Result<()> {
        if self.fail_delete.as_deref() == Some(name) {
            return Err(TrilogError::toolkit("delete_dataset", format!("{} is locked", name)));
        }
        let ws = self
            .workspace
            .clone()
            .ok_or_else(|| TrilogError::toolkit("delete_dataset", "no workspace set"))?;
        self.datasets.entry(ws).or_default().remove(name);
        Ok(())
    }

    fn describe_dataset(&self, name: &str) -> Result<Option<DatasetDescription>> {
        Ok(self.descriptions.get(name).cloned())
    }

    fn delimit_field(&self, _table: &str, field: &str) -> Result<String> {
        Ok(format!("\"{}\"", field))
    }

    fn field_type(&self, table: &str, field: &str) -> Result<FieldType> {
        self.fields
            .get(table)
            .and_then(|fields| fields.iter().find(|(name, _)| name == field))
            .map(|(_, t)| t.clone())
            .ok_or_else(|| TrilogError::FieldNotFound {
                table: table.to_string(),
                field: field.to_string(),
            })
    }

    fn list_fields(&self, table: &str) -> Result<Vec<String>> {
        Ok(self
            .fields
            .get(table)
            .map(|fields| fields.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default())
    }

    fn add_field(&mut self, table: &str, spec: &FieldSpec) -> Result<()> {
        self.fields
            .entry(table.to_string())
            .or_default()
            .push((spec.name.clone(), spec.field_type.clone()));
        self.added.push((table.to_string(), spec.clone()));
        Ok(())
    }

    fn calculate_field(&mut self, table: &str, field: &str, expression: &str) -> Result<()> {
        self.calculations
            .push((table.to_string(), field.to_string(), expression.to_string()));
        Ok(())
    }

    fn list_domains(&self, geodatabase: &str) -> Result<Vec<Domain>> {
        Ok(self.domains.get(geodatabase).cloned().unwrap_or_default())
    }

    fn create_domain(&mut self, geodatabase: &str, domain: &Domain) -> Result<()> {
        self.domains
            .entry(geodatabase.to_string())
            .or_default()
            .push(domain.clone());
        self.created_domains
            .push((geodatabase.to_string(), domain.clone()));
        Ok(())
    }
}
