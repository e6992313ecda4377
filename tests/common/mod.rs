#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A small but realistic DOCX layout, in the order Word writes it.
pub const DOCX_PARTS: &[(&str, &[u8])] = &[
    ("[Content_Types].xml", b"<?xml version=\"1.0\"?><Types/>"),
    ("_rels/", b""),
    ("_rels/.rels", b"<Relationships/>"),
    ("word/", b""),
    ("word/document.xml", b"<w:document><w:body/></w:document>"),
    ("word/media/", b""),
    ("word/media/image1.png", b"\x89PNG\r\n\x1a\nfirst image"),
    ("word/media/image2.jpeg", b"\xff\xd8\xff\xe0second image"),
    ("docProps/core.xml", b"<cp:coreProperties/>"),
];

pub fn build_zip(path: &Path, entries: &[(&str, &[u8])], method: CompressionMethod) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(method);

    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
    }
    zip.finish().unwrap();
}

pub fn build_docx(path: &Path) {
    build_zip(path, DOCX_PARTS, CompressionMethod::Deflated);
}

/// Non-directory parts of [`DOCX_PARTS`], in archive order.
pub fn docx_files() -> impl Iterator<Item = (&'static str, &'static [u8])> {
    DOCX_PARTS
        .iter()
        .copied()
        .filter(|(name, _)| !name.ends_with('/'))
}

pub fn basename(name: &str) -> &str {
    name.rsplit('/').next().unwrap()
}

/// One entry of a hand-assembled archive. Header fields are written exactly
/// as given, so they can contradict the data.
#[derive(Clone)]
pub struct RawEntry {
    pub name: String,
    pub data: Vec<u8>,
    pub method: u16,
    pub flags: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    /// Local header offset recorded in the Central Directory; the real one
    /// when `None`.
    pub lfh_offset: Option<u32>,
    pub cd_extra: Vec<u8>,
    pub cd_comment_len: u16,
}

impl RawEntry {
    /// A consistent STORED entry.
    pub fn stored(name: &str, data: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            data: data.to_vec(),
            method: 0,
            flags: 0,
            crc32: crc32fast::hash(data),
            compressed_size: data.len() as u32,
            uncompressed_size: data.len() as u32,
            lfh_offset: None,
            cd_extra: Vec::new(),
            cd_comment_len: 0,
        }
    }

    /// A consistent DEFLATE entry.
    pub fn deflated(name: &str, data: &[u8]) -> Self {
        let mut encoder =
            flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data).unwrap();
        let compressed = encoder.finish().unwrap();
        Self {
            compressed_size: compressed.len() as u32,
            data: compressed,
            method: 8,
            ..Self::stored(name, data)
        }
    }
}

/// ZIP64 extended information extra field carrying the given values.
pub fn zip64_extra(values: &[u64]) -> Vec<u8> {
    let mut extra = Vec::new();
    extra.extend_from_slice(&1u16.to_le_bytes());
    extra.extend_from_slice(&((values.len() * 8) as u16).to_le_bytes());
    for value in values {
        extra.extend_from_slice(&value.to_le_bytes());
    }
    extra
}

/// Assemble an archive byte by byte. With `zip64` the directory is located
/// through a ZIP64 End of Central Directory and its locator, and the
/// classic record only carries saturated fields.
pub fn raw_zip(entries: &[RawEntry], zip64: bool) -> Vec<u8> {
    let mut out = Vec::new();
    let mut offsets = Vec::new();

    for entry in entries {
        offsets.push(out.len() as u32);
        out.extend_from_slice(b"PK\x03\x04");
        put16(&mut out, 20);
        put16(&mut out, entry.flags);
        put16(&mut out, entry.method);
        put16(&mut out, 0);
        put16(&mut out, 0);
        put32(&mut out, entry.crc32);
        put32(&mut out, entry.compressed_size);
        put32(&mut out, entry.uncompressed_size);
        put16(&mut out, entry.name.len() as u16);
        put16(&mut out, 0);
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(&entry.data);
    }

    let cd_offset = out.len();
    for (entry, offset) in entries.iter().zip(&offsets) {
        out.extend_from_slice(b"PK\x01\x02");
        put16(&mut out, 20);
        put16(&mut out, 20);
        put16(&mut out, entry.flags);
        put16(&mut out, entry.method);
        put16(&mut out, 0);
        put16(&mut out, 0);
        put32(&mut out, entry.crc32);
        put32(&mut out, entry.compressed_size);
        put32(&mut out, entry.uncompressed_size);
        put16(&mut out, entry.name.len() as u16);
        put16(&mut out, entry.cd_extra.len() as u16);
        put16(&mut out, entry.cd_comment_len);
        put16(&mut out, 0);
        put16(&mut out, 0);
        put32(&mut out, 0);
        put32(&mut out, entry.lfh_offset.unwrap_or(*offset));
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(&entry.cd_extra);
    }
    let cd_size = out.len() - cd_offset;

    if zip64 {
        let eocd64_offset = out.len() as u64;
        out.extend_from_slice(b"PK\x06\x06");
        put64(&mut out, 44);
        put16(&mut out, 45);
        put16(&mut out, 45);
        put32(&mut out, 0);
        put32(&mut out, 0);
        put64(&mut out, entries.len() as u64);
        put64(&mut out, entries.len() as u64);
        put64(&mut out, cd_size as u64);
        put64(&mut out, cd_offset as u64);

        out.extend_from_slice(b"PK\x06\x07");
        put32(&mut out, 0);
        put64(&mut out, eocd64_offset);
        put32(&mut out, 1);
    }

    out.extend_from_slice(b"PK\x05\x06");
    put16(&mut out, 0);
    put16(&mut out, 0);
    if zip64 {
        put16(&mut out, u16::MAX);
        put16(&mut out, u16::MAX);
        put32(&mut out, u32::MAX);
        put32(&mut out, u32::MAX);
    } else {
        put16(&mut out, entries.len() as u16);
        put16(&mut out, entries.len() as u16);
        put32(&mut out, cd_size as u32);
        put32(&mut out, cd_offset as u32);
    }
    put16(&mut out, 0);
    out
}

fn put16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}
