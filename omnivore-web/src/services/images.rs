//! Local image file reading for the upload preview

use shared::{AppError, Result};

/// Read a picked file into a data URL usable directly as an `<img>` source.
pub async fn read_as_data_url(file: web_sys::File) -> Result<String> {
    let file = gloo_file::File::from(file);
    gloo_file::futures::read_as_data_url(&file)
        .await
        .map_err(|err| AppError::ImageRead(err.to_string()))
}
