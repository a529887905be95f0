// [libs/infra/roster-ingest/src/lib.rs]
/*!
 * APARATO: ROSTER INGEST (ESTRATO L1)
 * RESPONSABILIDAD: ADAPTADOR DE ENTRADA PARA LOS INSUMOS TABULARES (§6)
 *
 * The `DataSource` trait plus the one reference implementation backed by
 * flat CSV files. A surrounding service is free to implement `DataSource`
 * against a database or object store instead; that implementation does not
 * belong in this crate.
 */

pub mod csv_data_source;
pub mod data_source;

pub use csv_data_source::CsvDataSource;
pub use data_source::DataSource;
