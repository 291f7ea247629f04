use core::fmt;

use bstr::{BStr, BString, ByteSlice};

use crate::options::DIRECTORY_SEPARATOR;

/// One path extracted from the input stream.
///
/// The path bytes are owned by the record, so records outlive the buffer they
/// were extracted from. Paths are not required to be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilenameRecord {
    path: BString,
    directory_length: usize,
}

impl FilenameRecord {
    /// Build a record from a path, deriving its directory length.
    ///
    /// ```rust
    /// use pathtable::FilenameRecord;
    ///
    /// let record = FilenameRecord::new("src/lib.rs");
    /// assert_eq!(record.directory_length(), 4);
    /// assert_eq!(record.file_name(), "lib.rs");
    /// ```
    #[must_use]
    pub fn new(path: impl Into<BString>) -> Self {
        let path = path.into();
        let directory_length = directory_length(&path);
        Self {
            path,
            directory_length,
        }
    }

    /// Build a record whose directory length was computed by the caller.
    pub(crate) fn from_parts(path: BString, directory_length: usize) -> Self {
        debug_assert!(directory_length <= path.len());
        debug_assert_eq!(directory_length, self::directory_length(&path));
        Self {
            path,
            directory_length,
        }
    }

    /// The full path.
    #[must_use]
    pub fn path(&self) -> &BStr {
        self.path.as_bstr()
    }

    /// Offset just past the last `/` in the path, or 0 if there is none.
    #[must_use]
    pub fn directory_length(&self) -> usize {
        self.directory_length
    }

    /// The directory prefix, including its trailing `/`.
    #[must_use]
    pub fn directory(&self) -> &BStr {
        self.path[..self.directory_length].as_bstr()
    }

    /// Everything after the directory prefix.
    #[must_use]
    pub fn file_name(&self) -> &BStr {
        self.path[self.directory_length..].as_bstr()
    }

    /// Consume the record, returning the owned path.
    #[must_use]
    pub fn into_path(self) -> BString {
        self.path
    }
}

impl fmt::Display for FilenameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FilenameRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FilenameRecord", 2)?;
        state.serialize_field("path", &self.path.to_str_lossy())?;
        state.serialize_field("directory_length", &self.directory_length)?;
        state.end()
    }
}

/// Offset immediately past the last directory separator in `path`.
///
/// ```rust
/// assert_eq!(pathtable::directory_length(b"/a/b/c"), 5);
/// assert_eq!(pathtable::directory_length(b"noslash"), 0);
/// ```
#[must_use]
pub fn directory_length(path: &[u8]) -> usize {
    path.rfind_byte(DIRECTORY_SEPARATOR).map_or(0, |idx| idx + 1)
}
