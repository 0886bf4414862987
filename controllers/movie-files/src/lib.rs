// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod csv_file;
pub mod json;

pub use csv_file::CsvMoviesController;
pub use json::JsonMoviesController;

use catalog::{Catalog, Controller};
use config::{CatalogConfig, SourceFormat};

/// Pick the controller matching the configured format
pub fn controller_for(config: &CatalogConfig) -> Box<dyn Controller> {
    match config.format {
        SourceFormat::Json => Box::new(JsonMoviesController::with_path(&config.path)),
        SourceFormat::Csv => Box::new(CsvMoviesController::with_path(&config.path)),
    }
}

/// Load the configured catalog, empty if the source can't be read
pub fn load_catalog(config: &CatalogConfig) -> Catalog {
    let controller = controller_for(config);
    Catalog::load(&*controller)
}
