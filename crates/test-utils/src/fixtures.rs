//! Common test fixtures for the SST comparison tests.

/// Product file names for the reference comparison day (2016-10-01).
pub mod files {
    pub const GMI_DAILY: &str = "f35_20161001v8.2.gz";
    pub const MODIS_DAY: &str = "A2016275.L3m_DAY_SST_sst_4km.nc";
    pub const MODIS_NIGHT: &str = "A2016275.L3m_DAY_NSST_sst_4km.nc";
}

/// Grid definitions for the products under comparison.
pub mod grid {
    /// Coarse global grid with the GMI layout convention, cheap enough for
    /// end-to-end tests (10 degree cells, 36 x 18).
    pub const COARSE_GLOBAL_360: GridSpec = GridSpec {
        width: 36,
        height: 18,
        first_lon: 5.0,
        first_lat: -85.0,
        dlon: 10.0,
        dlat: 10.0,
    };

    /// Grid specification for testing.
    #[derive(Debug, Clone, Copy)]
    pub struct GridSpec {
        pub width: usize,
        pub height: usize,
        pub first_lon: f64,
        pub first_lat: f64,
        pub dlon: f64,
        pub dlat: f64,
    }

    impl GridSpec {
        /// Returns the total number of grid cells.
        pub fn size(&self) -> usize {
            self.width * self.height
        }

        pub fn lons(&self) -> Vec<f64> {
            crate::generators::regular_axis(self.first_lon, self.dlon, self.width)
        }

        pub fn lats(&self) -> Vec<f64> {
            crate::generators::regular_axis(self.first_lat, self.dlat, self.height)
        }
    }
}
