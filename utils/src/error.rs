
#[derive(Debug)]
#[allow(dead_code)] //suppress incorrect field not read warnings (see https://github.com/rust-lang/rust/issues/123068)
pub enum Error {

    Io(std::io::Error),
    Json(serde_json::Error),
    Geojson(geojson::Error),
    Layerstyles(layerstyles::utils::Error),
    InvalidInputError(std::string::String),

}

impl std::error::Error for Error {}

impl std::convert::From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::convert::From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl std::convert::From<geojson::Error> for Error {
    fn from(e: geojson::Error) -> Self {
        Error::Geojson(e)
    }
}

impl std::convert::From<layerstyles::utils::Error> for Error {
    fn from(e: layerstyles::utils::Error) -> Self {
        Error::Layerstyles(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}


pub type Result<T> = std::result::Result<T, Error>;
