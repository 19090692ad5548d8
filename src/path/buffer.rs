use crate::error::CapacityError;

/// Maximum supported path length in bytes. Every path produced by this
/// crate fits within this bound; longer results are reported as errors.
pub const MAX_PATH_LEN: usize = 4096;

/// An owned path string capped at [`MAX_PATH_LEN`] bytes.
///
/// Platform query results are funneled through this type so an oversized
/// path surfaces as a [`CapacityError`] instead of being truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuffer {
    inner: String,
}

impl PathBuffer {
    /// Append to the buffer. A rejected append leaves the buffer unchanged.
    pub fn push_str(&mut self, part: &str) -> Result<(), CapacityError> {
        check(self.inner.len() + part.len())?;
        self.inner.push_str(part);
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn into_string(self) -> String {
        self.inner
    }
}

impl TryFrom<&str> for PathBuffer {
    type Error = CapacityError;

    fn try_from(path: &str) -> Result<Self, CapacityError> {
        check(path.len())?;
        Ok(Self {
            inner: path.to_owned(),
        })
    }
}

impl TryFrom<String> for PathBuffer {
    type Error = CapacityError;

    fn try_from(path: String) -> Result<Self, CapacityError> {
        check(path.len())?;
        Ok(Self { inner: path })
    }
}

fn check(len: usize) -> Result<(), CapacityError> {
    if len > MAX_PATH_LEN {
        return Err(CapacityError { len });
    }
    Ok(())
}
