use core::cmp::Ordering;

use crate::{record::FilenameRecord, store::RecordStore};

/// Order two records by their full path, byte by byte.
///
/// Neither the file name nor the directory length takes part in the
/// comparison.
#[must_use]
pub fn compare_paths(a: &FilenameRecord, b: &FilenameRecord) -> Ordering {
    a.path().cmp(b.path())
}

/// Sort `store` in place by full path.
///
/// The sort is not stable: records with identical paths may end up in either
/// relative order. Callers must not rely on the original order of duplicates.
pub fn sort(store: &mut RecordStore) {
    store.as_mut_slice().sort_unstable_by(compare_paths);
}

#[cfg(test)]
mod tests {
    use bstr::ByteSlice;

    use super::*;

    fn paths(store: &RecordStore) -> Vec<&[u8]> {
        store.iter().map(|r| r.path().as_bytes()).collect()
    }

    fn store_of(items: &[&str]) -> RecordStore {
        items.iter().map(|&p| FilenameRecord::new(p)).collect()
    }

    #[test]
    fn sorts_by_full_path_not_file_name() {
        let mut store = store_of(&["b/a", "a/z", "a/b/c", "a/b"]);
        sort(&mut store);
        assert_eq!(
            paths(&store),
            [&b"a/b"[..], b"a/b/c", b"a/z", b"b/a"]
        );
    }

    #[test]
    fn compares_raw_bytes() {
        // '.' is 0x2e and '/' is 0x2f; uppercase precedes lowercase.
        let mut store = store_of(&["a.b", "a/b", "B", "a", ""]);
        sort(&mut store);
        assert_eq!(paths(&store), [&b""[..], b"B", b"a", b"a.b", b"a/b"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut store = store_of(&["z", "y/x", "y", "a/b/c"]);
        sort(&mut store);
        let once: Vec<Vec<u8>> = paths(&store).into_iter().map(<[u8]>::to_vec).collect();
        sort(&mut store);
        let twice: Vec<Vec<u8>> = paths(&store).into_iter().map(<[u8]>::to_vec).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn sorting_keeps_count_and_capacity() {
        let mut store = store_of(&["c", "b", "a", "b"]);
        let capacity = store.capacity();
        sort(&mut store);
        assert_eq!(store.len(), 4);
        assert_eq!(store.capacity(), capacity);
        assert_eq!(paths(&store), [&b"a"[..], b"b", b"b", b"c"]);
    }
}
