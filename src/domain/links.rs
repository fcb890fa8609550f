/// Path under which stored blobs are served.
const UPLOADS_PATH: &str = "/uploads";

/// Builds the client-resolvable URL for a stored file. Without a
/// configured base the URL is root-relative; with one it is exactly
/// `<base>/uploads/<filename>`, trailing slashes on the base collapsed.
pub fn upload_url(base: Option<&str>, filename: &str) -> String {
    let path = format!("{}/{}", UPLOADS_PATH, filename);
    match base {
        Some(base) if !base.is_empty() => {
            format!("{}{}", base.trim_end_matches('/'), path)
        }
        _ => path,
    }
}
