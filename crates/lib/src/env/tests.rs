use super::{pos_from, Size};

fn pos(data: &[u8], at: usize) -> String {
    pos_from(data, Size::new(at)..Size::new(at)).to_string()
}

#[test]
fn test_pos_first_line() {
    assert_eq!(pos(b"1721\n979\n", 0), "1:1");
    assert_eq!(pos(b"1721\n979\n", 3), "1:4");
}

#[test]
fn test_pos_later_lines() {
    let data = b"12\nabc\n\n7";
    assert_eq!(pos(data, 3), "2:1");
    assert_eq!(pos(data, 5), "2:3");
    assert_eq!(pos(data, 7), "3:1");
    assert_eq!(pos(data, 8), "4:1");
}

#[test]
fn test_pos_out_of_bounds() {
    assert_eq!(pos(b"12\n", 100), "2:1");
    assert_eq!(pos(b"", 0), "1:1");
}

fn temp_file(name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("aoc-lib-{}-{name}", std::process::id()));
    std::fs::write(&path, data).unwrap();
    path
}

#[test]
fn test_input_override() {
    let path = temp_file("override.txt", b"1010\n5\n");
    let opts = crate::cli::Opts::parse_from(["--input".into(), path.clone().into()]).unwrap();
    assert!(!opts.uses_default_input());

    let (input, shown) = super::input(&opts, "inputs/d01.txt", "/does/not/exist/d01.txt").unwrap();
    assert_eq!(input.as_data(), b"1010\n5\n");
    assert_eq!(&*shown, path.as_path());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_input_default() {
    let path = temp_file("default.txt", b"1721\n");
    let read_path: &'static str = Box::leak(path.to_string_lossy().into_owned().into_boxed_str());
    let opts = crate::cli::Opts::default();
    assert!(opts.uses_default_input());

    let (input, shown) = super::input(&opts, "inputs/d01.txt", read_path).unwrap();
    assert_eq!(input.as_data(), b"1721\n");
    assert_eq!(&*shown, std::path::Path::new("inputs/d01.txt"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_input_missing() {
    let opts = crate::cli::Opts::default();
    let e = super::input(&opts, "inputs/d99.txt", "/does/not/exist/d99.txt").unwrap_err();
    assert_eq!(e.to_string(), "inputs/d99.txt");
}
