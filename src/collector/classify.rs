//! Extension-based file classification.
//!
//! A file's extension decides its coarse type, which in turn decides
//! whether the collector scans it for embedded license tags and whether
//! configured snippets apply to it. Only Source files get either
//! treatment.

use serde::{Deserialize, Serialize};

/// Coarse file classification used in manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    Source,
    Binary,
    Archive,
    Text,
    Image,
    Audio,
    Video,
    Application,
    Documentation,
    Spdx,
    Other,
}

/// Extension of the final path component, without the dot.
///
/// A name whose only dot leads (like `.gitignore`) has no extension.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index >= 1 => &file_name[index + 1..],
        _ => "",
    }
}

/// Classify a file extension. Matching is case-insensitive; anything
/// unrecognized is `Other`.
pub fn classify_extension(extension: &str) -> FileType {
    match extension.to_ascii_uppercase().as_str() {
        "C" | "CC" | "CPP" | "CXX" | "H" | "HPP" | "JAVA" | "PY" | "RS" | "GO" | "JS" | "TS"
        | "RB" | "PHP" | "CS" | "SH" | "BASH" | "PL" | "PM" | "SWIFT" | "KT" | "SCALA" | "M"
        | "ASM" | "S" | "SQL" | "R" | "LUA" | "GROOVY" | "CLJ" | "ERL" | "EX" | "EXS" | "HS"
        | "ML" | "F90" | "VB" | "BAT" | "PS1" => FileType::Source,
        "CLASS" | "EXE" | "DLL" | "OBJ" | "O" | "SO" | "A" | "LIB" | "BIN" | "DAT" | "DYLIB"
        | "JNILIB" | "WASM" => FileType::Binary,
        "ZIP" | "TAR" | "GZ" | "TGZ" | "BZ2" | "XZ" | "7Z" | "RAR" | "JAR" | "WAR" | "EAR"
        | "APK" | "DEB" | "RPM" => FileType::Archive,
        "TXT" | "TEXT" | "LOG" | "MD" | "MARKDOWN" | "CSV" | "TSV" | "PROPERTIES" | "YAML"
        | "YML" | "TOML" | "JSON" | "XML" | "INI" | "CFG" => FileType::Text,
        "PNG" | "JPG" | "JPEG" | "GIF" | "BMP" | "SVG" | "ICO" | "TIF" | "TIFF" | "WEBP" => {
            FileType::Image
        }
        "MP3" | "WAV" | "OGG" | "FLAC" | "AAC" | "M4A" | "MID" | "MIDI" | "WMA" => {
            FileType::Audio
        }
        "SWF" | "MP4" | "AVI" | "MOV" | "MPG" | "MPEG" | "WMV" | "FLV" | "MKV" | "WEBM" => {
            FileType::Video
        }
        "MSI" | "DMG" | "PKG" | "APP" => FileType::Application,
        "HTM" | "HTML" | "PDF" | "DOC" | "DOCX" | "RTF" | "TEX" | "MAN" | "ODT" => {
            FileType::Documentation
        }
        "SPDX" => FileType::Spdx,
        _ => FileType::Other,
    }
}

/// Types recorded for a file, derived from its name.
pub fn file_types_for(file_name: &str) -> Vec<FileType> {
    vec![classify_extension(extension_of(file_name))]
}

/// Whether any recorded type marks the file as source code.
pub fn is_source(file_types: &[FileType]) -> bool {
    file_types.contains(&FileType::Source)
}
