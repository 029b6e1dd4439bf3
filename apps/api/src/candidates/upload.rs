//! Turns an uploaded resume file into plain text for the analysis pipeline.

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";
const UTF8_BOM: char = '\u{feff}';

/// Extracts resume text from an upload. PDFs go through `pdf-extract`; anything
/// else must be UTF-8 text. Blank results are rejected.
pub fn resume_text_from_upload(
    file_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, AppError> {
    let text = if is_pdf(file_name, content_type, bytes) {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?
    } else {
        let text = std::str::from_utf8(bytes).map_err(|_| {
            AppError::UnprocessableEntity("Resume file is not valid UTF-8 text".to_string())
        })?;
        text.trim_start_matches(UTF8_BOM).to_string()
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation("Resume file contains no text".to_string()));
    }
    Ok(text)
}

fn is_pdf(file_name: Option<&str>, content_type: Option<&str>, bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
        || content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        || file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_upload() {
        let text = resume_text_from_upload(Some("cv.txt"), Some("text/plain"), b"Jane Smith\n").unwrap();
        assert_eq!(text, "Jane Smith\n");
    }

    #[test]
    fn test_bom_is_stripped() {
        let bytes = "\u{feff}José García\n".as_bytes();
        let text = resume_text_from_upload(None, None, bytes).unwrap();
        assert_eq!(text, "José García\n");
    }

    #[test]
    fn test_invalid_utf8_is_unprocessable() {
        let err = resume_text_from_upload(Some("cv.txt"), None, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_blank_upload_is_rejected() {
        let err = resume_text_from_upload(None, None, b"   \n ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_pdf_detection() {
        assert!(is_pdf(None, None, b"%PDF-1.7 ..."));
        assert!(is_pdf(None, Some("application/PDF"), b""));
        assert!(is_pdf(Some("Resume.PDF"), None, b""));
        assert!(!is_pdf(Some("resume.txt"), Some("text/plain"), b"hello"));
    }

    #[test]
    fn test_corrupt_pdf_is_unprocessable() {
        let err = resume_text_from_upload(Some("cv.pdf"), None, b"%PDF-1.4 garbage").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
