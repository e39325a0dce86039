//! Single-part multipart/form-data encoding for file uploads
//!
//! The boundary is a fixed constant rather than a generated token. Uploads
//! carry exactly one part, so a collision with file content is the only risk,
//! and the constant is chosen to be implausible inside resource files. If
//! multi-field uploads are ever added this must switch to a generated,
//! collision-checked boundary.

/// Boundary token used for every upload body
pub const BOUNDARY: &str = "onesky-client-file";

const CRLF: &str = "\r\n";

/// Serialize a file plus its form-data headers into a multipart body.
///
/// The effective filename is `"{prefix}-{file_name}"` when a non-empty prefix
/// is supplied. Output is byte-identical for identical input; every line
/// terminator is an explicit CRLF so transports that normalize line endings
/// cannot corrupt the body.
pub fn encode_file_part(
    field_name: &str,
    file_name: &str,
    file_name_prefix: Option<&str>,
    content: &[u8],
) -> Vec<u8> {
    let effective_file_name = match file_name_prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}-{}", prefix, file_name),
        _ => file_name.to_string(),
    };

    let mut body = Vec::with_capacity(content.len() + 256);
    let headers = format!(
        "--{boundary}{crlf}\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file}\"{crlf}\
         Content-Type: application/octet-stream{crlf}\
         Content-Length: {len}{crlf}\
         {crlf}",
        boundary = BOUNDARY,
        field = field_name,
        file = effective_file_name,
        len = content.len(),
        crlf = CRLF,
    );
    body.extend_from_slice(headers.as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("{crlf}--{BOUNDARY}--{crlf}", crlf = CRLF).as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &[u8] = b"Hello OneSky Gradle Plugin";

    #[test]
    fn test_body_layout_with_crlf_terminators() {
        let body = encode_file_part("file", "strings.xml", None, CONTENT);
        let expected = "--onesky-client-file\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"strings.xml\"\r\n\
            Content-Type: application/octet-stream\r\n\
            Content-Length: 26\r\n\
            \r\n\
            Hello OneSky Gradle Plugin\r\n\
            --onesky-client-file--\r\n";
        assert_eq!(String::from_utf8(body).unwrap(), expected);
    }

    #[test]
    fn test_prefix_is_joined_to_file_name() {
        let body = encode_file_part("file", "strings.xml", Some("my-feature"), CONTENT);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("filename=\"my-feature-strings.xml\""));
    }

    #[test]
    fn test_empty_prefix_leaves_file_name_unchanged() {
        let body = encode_file_part("file", "strings.xml", Some(""), CONTENT);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("filename=\"strings.xml\""));
    }

    #[test]
    fn test_output_is_deterministic() {
        let a = encode_file_part("file", "strings.xml", Some("my-feature"), CONTENT);
        let b = encode_file_part("file", "strings.xml", Some("my-feature"), CONTENT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_content_length_reflects_byte_count() {
        let body = encode_file_part("file", "values.xml", None, "ünïcode".as_bytes());
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains(&format!("Content-Length: {}\r\n", "ünïcode".len())));
    }
}
