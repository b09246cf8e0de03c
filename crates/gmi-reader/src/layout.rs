//! Bytemap layout and variable table for RSS GMI daily files.

/// Byte values above this threshold are special codes, not measurements.
pub const MAX_VALID_BYTE: u8 = 250;

/// Code for cells flagged because rain contaminates the retrieval.
pub const CODE_RAIN_FLAG: u8 = 251;
/// Code for sea ice.
pub const CODE_ICE: u8 = 252;
/// Code for bad data.
pub const CODE_BAD_DATA: u8 = 253;
/// Code for no observation in this pass.
pub const CODE_NO_OBS: u8 = 254;
/// Code for land.
pub const CODE_LAND: u8 = 255;

/// Decoding parameters and descriptive attributes for one geophysical map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableSpec {
    pub name: &'static str,
    pub long_name: &'static str,
    pub units: &'static str,
    pub scale: f32,
    pub offset: f32,
    pub valid_min: f32,
    pub valid_max: f32,
}

impl VariableSpec {
    /// Convert a raw byte to a physical value, or `missing` for special codes.
    #[inline]
    pub fn decode(&self, byte: u8, missing: f32) -> f32 {
        if byte > MAX_VALID_BYTE {
            missing
        } else {
            byte as f32 * self.scale + self.offset
        }
    }
}

/// Maps stored per pass, in file order.
pub const GMI_VARIABLES: [VariableSpec; 7] = [
    VariableSpec {
        name: "time",
        long_name: "Time of Day UTC",
        units: "hour",
        scale: 0.1,
        offset: 0.0,
        valid_min: 0.0,
        valid_max: 24.0,
    },
    VariableSpec {
        name: "sst",
        long_name: "Sea Surface Temperature",
        units: "deg Celsius",
        scale: 0.15,
        offset: -3.0,
        valid_min: -3.0,
        valid_max: 34.5,
    },
    VariableSpec {
        name: "windLF",
        long_name: "10m Surface Wind Speed (low frequency)",
        units: "m/s",
        scale: 0.2,
        offset: 0.0,
        valid_min: 0.0,
        valid_max: 50.0,
    },
    VariableSpec {
        name: "windMF",
        long_name: "10m Surface Wind Speed (medium frequency)",
        units: "m/s",
        scale: 0.2,
        offset: 0.0,
        valid_min: 0.0,
        valid_max: 50.0,
    },
    VariableSpec {
        name: "vapor",
        long_name: "Columnar Water Vapor",
        units: "mm",
        scale: 0.3,
        offset: 0.0,
        valid_min: 0.0,
        valid_max: 75.0,
    },
    VariableSpec {
        name: "cloud",
        long_name: "Cloud Liquid Water",
        units: "mm",
        scale: 0.01,
        offset: -0.05,
        valid_min: -0.05,
        valid_max: 2.45,
    },
    VariableSpec {
        name: "rain",
        long_name: "Surface Rain Rate",
        units: "mm/hr",
        scale: 0.1,
        offset: 0.0,
        valid_min: 0.0,
        valid_max: 25.0,
    },
];

/// Look up a map by name.
pub fn variable_spec(name: &str) -> Option<&'static VariableSpec> {
    GMI_VARIABLES.iter().find(|spec| spec.name == name)
}

/// Dimensions of a bytemap file: `passes × variables × nlat × nlon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GmiLayout {
    /// Orbit segments per file (ascending/descending)
    pub passes: usize,
    pub nlat: usize,
    pub nlon: usize,
}

impl GmiLayout {
    /// Standard 0.25 degree global daily layout.
    pub const DAILY_QUARTER_DEGREE: GmiLayout = GmiLayout {
        passes: 2,
        nlat: 720,
        nlon: 1440,
    };

    pub fn new(passes: usize, nlat: usize, nlon: usize) -> Self {
        Self { passes, nlat, nlon }
    }

    /// Bytes in one map.
    pub fn map_len(&self) -> usize {
        self.nlat * self.nlon
    }

    /// Total bytes expected in the decompressed payload.
    pub fn payload_len(&self) -> usize {
        self.passes * GMI_VARIABLES.len() * self.map_len()
    }

    /// Byte offset of the map for (`pass`, variable index `var`).
    pub fn map_offset(&self, pass: usize, var: usize) -> usize {
        (pass * GMI_VARIABLES.len() + var) * self.map_len()
    }

    /// Cell-centred latitudes, south to north.
    pub fn latitudes(&self) -> Vec<f64> {
        let step = 180.0 / self.nlat as f64;
        (0..self.nlat)
            .map(|i| step * i as f64 - 90.0 + step / 2.0)
            .collect()
    }

    /// Cell-centred longitudes on [0, 360).
    pub fn longitudes(&self) -> Vec<f64> {
        let step = 360.0 / self.nlon as f64;
        (0..self.nlon).map(|j| step * j as f64 + step / 2.0).collect()
    }
}

impl Default for GmiLayout {
    fn default() -> Self {
        Self::DAILY_QUARTER_DEGREE
    }
}
