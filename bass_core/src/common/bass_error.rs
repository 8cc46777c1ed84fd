use std::path::PathBuf;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the Bass estimation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Data errors (0-99)
    #[strum(serialize = "_DATA_ERR_BEGIN")]
    DataErrBegin = 0,
    #[strum(serialize = "SRC_DATA_NOT_FOUND")]
    SrcDataNotFound = 1,
    #[strum(serialize = "SRC_DATA_FORMAT_ERROR")]
    SrcDataFormatError = 2,
    #[strum(serialize = "SRC_DATA_TYPE_ERR")]
    SrcDataTypeErr = 3,
    #[strum(serialize = "IO_ERROR")]
    IoError = 4,
    #[strum(serialize = "_DATA_ERR_END")]
    DataErrEnd = 99,

    // Model errors (100-199)
    #[strum(serialize = "_MODEL_ERR_BEGIN")]
    ModelErrBegin = 100,
    #[strum(serialize = "INSUFFICIENT_DATA")]
    InsufficientData = 101,
    #[strum(serialize = "DEGENERATE_DATA")]
    DegenerateData = 102,
    #[strum(serialize = "NO_REAL_SOLUTION")]
    NoRealSolution = 103,
    #[strum(serialize = "NO_VALID_MARKET_POTENTIAL")]
    NoValidMarketPotential = 104,
    #[strum(serialize = "NOT_FITTED")]
    NotFitted = 105,
    #[strum(serialize = "_MODEL_ERR_END")]
    ModelErrEnd = 199,

    // Config errors (200-299)
    #[strum(serialize = "_CONFIG_ERR_BEGIN")]
    ConfigErrBegin = 200,
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 201,
    #[strum(serialize = "_CONFIG_ERR_END")]
    ConfigErrEnd = 299,
}

impl ErrCode {
    pub fn is_data_err(&self) -> bool {
        let code = *self as i32;
        code > Self::DataErrBegin as i32 && code < Self::DataErrEnd as i32
    }

    pub fn is_model_err(&self) -> bool {
        let code = *self as i32;
        code > Self::ModelErrBegin as i32 && code < Self::ModelErrEnd as i32
    }

    pub fn is_config_err(&self) -> bool {
        let code = *self as i32;
        code > Self::ConfigErrBegin as i32 && code < Self::ConfigErrEnd as i32
    }
}

/// Every failure the pipeline can report. None of them is recovered locally.
#[derive(Debug, Error)]
pub enum BassError {
    /// Too few lagged observations to determine the three coefficients.
    #[error("insufficient data: need at least {required} regression rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// The design matrix is rank deficient or the solve produced non-finite values.
    #[error("degenerate data: {0}")]
    DegenerateData(String),

    /// Negative discriminant of the market-potential quadratic.
    #[error("no real solution for market potential (discriminant = {discriminant})")]
    NoRealSolution { discriminant: f64 },

    /// Neither root of the market-potential quadratic is positive.
    #[error("no valid market potential among roots {roots:?}")]
    NoValidMarketPotential { roots: Vec<f64> },

    /// A stage was requested before the stage it depends on has run.
    #[error("model not fitted: {0}")]
    NotFitted(String),

    #[error("data file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed data: {0}")]
    MalformedData(String),

    #[error("unsupported data format: {0}")]
    UnsupportedFormat(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BassError {
    pub fn errcode(&self) -> ErrCode {
        match self {
            BassError::InsufficientData { .. } => ErrCode::InsufficientData,
            BassError::DegenerateData(_) => ErrCode::DegenerateData,
            BassError::NoRealSolution { .. } => ErrCode::NoRealSolution,
            BassError::NoValidMarketPotential { .. } => ErrCode::NoValidMarketPotential,
            BassError::NotFitted(_) => ErrCode::NotFitted,
            BassError::FileNotFound(_) => ErrCode::SrcDataNotFound,
            BassError::MalformedData(_) => ErrCode::SrcDataFormatError,
            BassError::UnsupportedFormat(_) => ErrCode::SrcDataTypeErr,
            BassError::Spreadsheet(_) => ErrCode::SrcDataFormatError,
            BassError::Config(_) => ErrCode::ParaError,
            BassError::Io(_) => ErrCode::IoError,
        }
    }

    pub fn is_data_err(&self) -> bool {
        self.errcode().is_data_err()
    }

    pub fn is_model_err(&self) -> bool {
        self.errcode().is_model_err()
    }
}

impl From<csv::Error> for BassError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => BassError::Io(io),
                other => BassError::MalformedData(format!("{:?}", other)),
            }
        } else {
            BassError::MalformedData(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BassError>;
