//! On-disk records of the ZIP container.
//!
//! Only the fields the extractor needs are kept; everything else in a record
//! is read past.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use anyhow::{Result, bail};

/// Compression method of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Stored,
            8 => CompressionMethod::Deflate,
            _ => CompressionMethod::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
            CompressionMethod::Unknown(v) => *v,
        }
    }
}

/// Verify that `data` holds a whole record starting with `signature` and
/// return a cursor over the bytes following the signature.
fn record_body<'a>(
    data: &'a [u8],
    signature: &[u8],
    size: usize,
    what: &str,
) -> Result<Cursor<&'a [u8]>> {
    if data.len() < size || &data[..4] != signature {
        bail!("Invalid {what}");
    }
    Ok(Cursor::new(&data[4..size]))
}

/// End of Central Directory (EOCD) - 22 bytes without comment
pub struct EndOfCentralDirectory {
    pub disk_entries: u16,
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: &'static [u8] = b"PK\x05\x06";
    pub const SIZE: usize = 22;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut body =
            record_body(data, Self::SIGNATURE, Self::SIZE, "End of Central Directory")?;

        // Multi-disk archives are not a thing for DOCX; skip both disk numbers.
        body.set_position(4);
        Ok(Self {
            disk_entries: body.read_u16::<LittleEndian>()?,
            total_entries: body.read_u16::<LittleEndian>()?,
            cd_size: body.read_u32::<LittleEndian>()?,
            cd_offset: body.read_u32::<LittleEndian>()?,
        })
    }

    /// Any saturated field means the real value lives in the ZIP64 record.
    pub fn is_zip64(&self) -> bool {
        self.disk_entries == u16::MAX
            || self.total_entries == u16::MAX
            || self.cd_size == u32::MAX
            || self.cd_offset == u32::MAX
    }
}

/// ZIP64 End of Central Directory Locator - 20 bytes
pub struct Zip64EOCDLocator {
    pub eocd64_offset: u64,
}

impl Zip64EOCDLocator {
    pub const SIGNATURE: &'static [u8] = b"PK\x06\x07";
    pub const SIZE: usize = 20;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut body = record_body(data, Self::SIGNATURE, Self::SIZE, "ZIP64 locator")?;
        body.set_position(4);
        Ok(Self {
            eocd64_offset: body.read_u64::<LittleEndian>()?,
        })
    }
}

/// ZIP64 End of Central Directory - 56 bytes minimum
pub struct Zip64EOCD {
    pub total_entries: u64,
    pub cd_size: u64,
    pub cd_offset: u64,
}

impl Zip64EOCD {
    pub const SIGNATURE: &'static [u8] = b"PK\x06\x06";
    pub const MIN_SIZE: usize = 56;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut body = record_body(
            data,
            Self::SIGNATURE,
            Self::MIN_SIZE,
            "ZIP64 End of Central Directory",
        )?;

        // record size (8), versions (2+2), disk numbers (4+4), entries on this disk (8)
        body.set_position(28);
        Ok(Self {
            total_entries: body.read_u64::<LittleEndian>()?,
            cd_size: body.read_u64::<LittleEndian>()?,
            cd_offset: body.read_u64::<LittleEndian>()?,
        })
    }
}

/// Central Directory File Header (CDFH) - 46 bytes minimum
pub const CDFH_SIGNATURE: &[u8] = b"PK\x01\x02";
pub const CDFH_MIN_SIZE: usize = 46;

/// Local File Header (LFH) - 30 bytes
pub const LFH_SIGNATURE: &[u8] = b"PK\x03\x04";
pub const LFH_SIZE: usize = 30;

/// General purpose flag: entry is encrypted
pub const FLAG_ENCRYPTED: u16 = 0x0001;

/// One stored item of the archive, as described by the Central Directory
#[derive(Debug, Clone)]
pub struct ZipFileEntry {
    pub file_name: String,
    pub compression_method: CompressionMethod,
    pub flags: u16,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub crc32: u32,
    pub lfh_offset: u64,
    pub is_directory: bool,
}

impl ZipFileEntry {
    pub fn is_encrypted(&self) -> bool {
        self.flags & FLAG_ENCRYPTED != 0
    }
}
