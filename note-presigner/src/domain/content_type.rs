// note-presigner/src/domain/content_type.rs

use mime::Mime;

/// ファイル名の拡張子から Content-Type を決定する
///
/// 拡張子は最後の `.` 以降を大文字小文字を区別せずに判定し、
/// 未知または拡張子なしの場合は `application/octet-stream`。
pub fn content_type_for(file_name: &str) -> Mime {
    file_name
        .rsplit_once('.')
        .and_then(|(_, extension)| from_ext(extension))
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

fn from_ext(ext: &str) -> Option<Mime> {
    match ext.to_lowercase().as_str() {
        "txt" => Some(mime::TEXT_PLAIN),
        "pdf" => Some(mime::APPLICATION_PDF),
        "png" => Some(mime::IMAGE_PNG),
        "jpg" | "jpeg" => Some(mime::IMAGE_JPEG),
        "gif" => Some(mime::IMAGE_GIF),
        "json" => Some(mime::APPLICATION_JSON),
        "csv" => Some(mime::TEXT_CSV),
        // Office
        "doc" => "application/msword".parse().ok(),
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            .parse()
            .ok(),
        "xls" => "application/vnd.ms-excel".parse().ok(),
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            .parse()
            .ok(),
        _ => None,
    }
}
