//! Object key utilities / 对象键工具函数

/// Collapse every run of consecutive `/` in an object key to a single `/`.
/// 将对象键中连续的 `/` 合并为单个 `/`
///
/// Used when composing a key from a bucket id and a relative path, where
/// either side may carry its own separators. Idempotent: normalizing twice
/// equals normalizing once.
pub fn normalize_object_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_slash = false;
    for c in key.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_object_key() {
        assert_eq!(normalize_object_key(""), "");
        assert_eq!(normalize_object_key("a/b/c"), "a/b/c");
        assert_eq!(normalize_object_key("a//b///c"), "a/b/c");
        assert_eq!(normalize_object_key("bucket//dir/file.txt"), "bucket/dir/file.txt");
        assert_eq!(normalize_object_key("////"), "/");
        assert_eq!(normalize_object_key("/a/"), "/a/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["", "a//b///c", "////", "a/b", "//x//y//"] {
            let once = normalize_object_key(s);
            assert_eq!(normalize_object_key(&once), once);
        }
    }
}
