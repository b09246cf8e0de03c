//! Human-readable dataset listings.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::NetCdfResult;
use crate::native::{get_string_attr, open_dataset};

/// One variable in a [`NetCdfSummary`].
#[derive(Debug, Clone)]
pub struct VariableSummary {
    pub name: String,
    pub dims: Vec<String>,
    pub long_name: Option<String>,
}

/// Dimensions, variables and global attribute names of a NetCDF file.
#[derive(Debug, Clone)]
pub struct NetCdfSummary {
    pub path: PathBuf,
    pub dimensions: Vec<(String, usize)>,
    pub variables: Vec<VariableSummary>,
    pub global_attributes: Vec<String>,
}

/// Collect a summary of `path` without reading any variable data.
pub fn summarize<P: AsRef<Path>>(path: P) -> NetCdfResult<NetCdfSummary> {
    let path = path.as_ref();
    let file = open_dataset(path)?;

    let dimensions = file
        .dimensions()
        .map(|d| (d.name().to_string(), d.len()))
        .collect();

    let variables = file
        .variables()
        .map(|v| VariableSummary {
            name: v.name().to_string(),
            dims: v.dimensions().iter().map(|d| d.name().to_string()).collect(),
            long_name: get_string_attr(&v, "long_name"),
        })
        .collect();

    let global_attributes = file.attributes().map(|a| a.name().to_string()).collect();

    Ok(NetCdfSummary {
        path: path.to_path_buf(),
        dimensions,
        variables,
        global_attributes,
    })
}

impl fmt::Display for NetCdfSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<netcdf {}>", self.path.display())?;

        let dims: Vec<String> = self
            .dimensions
            .iter()
            .map(|(name, len)| format!("{}: {}", name, len))
            .collect();
        writeln!(f, "Dimensions:  ({})", dims.join(", "))?;

        writeln!(f, "Variables:")?;
        for var in &self.variables {
            write!(f, "    {:<12} ({})", var.name, var.dims.join(", "))?;
            if let Some(long_name) = &var.long_name {
                write!(f, "  {}", long_name)?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "Attributes: ({}) {}",
            self.global_attributes.len(),
            self.global_attributes.join(", ")
        )
    }
}
