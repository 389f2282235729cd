use base64::{engine::general_purpose, Engine as _};
use std::path::{Path, PathBuf};

pub fn decode_image(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(encoded.trim())
}

/// Writes the decoded image bytes to `path`. Local only, nothing is uploaded.
pub async fn save_image(encoded: &str, path: &Path) -> anyhow::Result<()> {
    let bytes = decode_image(encoded)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Native save dialog. `None` when the user cancels.
pub async fn pick_save_path(default_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_file_name(default_name)
        .add_filter("PNG image", &["png"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_decoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated_image.png");
        save_image("iVBORw0KGgo=", &path).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[tokio::test]
    async fn invalid_payload_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        assert!(save_image("%%%", &path).await.is_err());
        assert!(!path.exists());
    }
}
