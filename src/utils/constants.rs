/// Spreadsheet file name prefixes
pub const SECTOR_FILE_PREFIX: &str = "Sincronismo";
pub const SEPARATION_FILE_PREFIX: &str = "Detalhes_Se";

/// Supported spreadsheet extensions
pub const SPREADSHEET_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];

/// Default input directory, relative to the service root
pub const DEFAULT_DATA_DIR: &str = "Dados";

/// Filler values applied to empty cells in the separation export
pub const UNALLOCATED_USER: &str = "Não alocado";
pub const CLOSED_PICKING_LIST: &str = "PL Fechado";

/// The export writes pending status without the tilde
pub const PENDING_NO: &str = "Nao";

/// Payload messages
pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado";
pub const PROCESSING_ERROR_MESSAGE: &str = "Erro ao processar dados";
