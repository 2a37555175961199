//! Plain-text memory-image loader. See spec §6.
//!
//! The original reads three plain-text image files whose exact
//! tokenization spec.md leaves to "the Memory/RegisterFile collaborators"
//! (§5). Each non-blank, non-comment line maps an index (register number
//! or byte address) to a 32-bit value: `<index> <value>`. Both fields
//! accept `0x`/`0b`-prefixed or bare-decimal integers, matching the mix of
//! hex addresses and binary instruction encodings spec.md's own scenario
//! text uses (§8).

use std::path::Path;

use crate::error::ImageError;
use crate::memory::{Endianness, Memory};
use crate::register_file::RegisterFile;

fn parse_int(token: &str) -> Option<u32> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = token.strip_prefix("0b").or_else(|| token.strip_prefix("0B")) {
        u32::from_str_radix(bin, 2).ok()
    } else {
        token.parse::<u32>().ok()
    }
}

struct ImageLine {
    line_no: usize,
    index: u32,
    value: u32,
}

fn read_lines(path: &Path) -> Result<Vec<ImageLine>, ImageError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ImageError::FileReadError(path.to_path_buf(), e))?;

    let mut out = Vec::new();
    for (i, raw_line) in content.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let (Some(index_tok), Some(value_tok), None) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ImageError::ParseError {
                path: path.to_path_buf(),
                line: i + 1,
                reason: "expected exactly two whitespace-separated fields".into(),
            });
        };
        let index = parse_int(index_tok).ok_or_else(|| ImageError::ParseError {
            path: path.to_path_buf(),
            line: i + 1,
            reason: format!("'{index_tok}' is not a valid integer"),
        })?;
        let value = parse_int(value_tok).ok_or_else(|| ImageError::ParseError {
            path: path.to_path_buf(),
            line: i + 1,
            reason: format!("'{value_tok}' is not a valid integer"),
        })?;
        out.push(ImageLine { line_no: i + 1, index, value });
    }
    Ok(out)
}

/// Loads a register-file image. Lines index registers `0..32`.
pub fn load_register_file(path: &Path) -> Result<RegisterFile, ImageError> {
    let mut rf = RegisterFile::default();
    for entry in read_lines(path)? {
        if entry.index >= 32 {
            return Err(ImageError::RegisterIndexOutOfBounds(
                entry.index,
                path.to_path_buf(),
                entry.line_no,
            ));
        }
        rf.set_raw(entry.index as usize, entry.value);
    }
    Ok(rf)
}

/// Loads a word-addressable memory image into a freshly allocated
/// `Memory` of `size_bytes`, little-endian (the reference driver's only
/// configured endianness, per spec.md §6).
pub fn load_memory(path: &Path, size_bytes: usize) -> Result<Memory, ImageError> {
    let mut mem = Memory::new(size_bytes, Endianness::Little);
    for entry in read_lines(path)? {
        if entry.index as usize + 4 > size_bytes {
            return Err(ImageError::AddressOutOfBounds(
                entry.index,
                path.to_path_buf(),
                size_bytes,
                entry.line_no,
            ));
        }
        mem.word_write(entry.index, entry.value);
    }
    Ok(mem)
}
