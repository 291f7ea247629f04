#![allow(dead_code)]

use std::io::{self, Read};

/// Hands out the payload in fixed-size reads, then fails with `kind` if set.
pub struct ScriptedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
    fail_with: Option<io::ErrorKind>,
}

impl ScriptedReader {
    pub fn new(data: impl Into<Vec<u8>>, chunk: usize) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            chunk: chunk.max(1),
            fail_with: None,
        }
    }

    pub fn failing_with(mut self, kind: io::ErrorKind) -> Self {
        self.fail_with = Some(kind);
        self
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.pos..];
        if remaining.is_empty() {
            return match self.fail_with {
                Some(kind) => Err(io::Error::new(kind, "scripted failure")),
                None => Ok(0),
            };
        }
        let n = self.chunk.min(buf.len()).min(remaining.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// `count` distinct paths spread over a few directories, in scrambled order.
pub fn scrambled_paths(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let n = (i * 7919) % count;
            format!("/srv/data/{:02}/file-{n:06}.bin", n % 13)
        })
        .collect()
}

pub fn nul_joined(paths: &[String]) -> Vec<u8> {
    let mut out = Vec::new();
    for path in paths {
        out.extend_from_slice(path.as_bytes());
        out.push(0);
    }
    out
}
