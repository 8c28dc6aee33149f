use combinefiles::{Collector, CombineBuilder, CombineError, Config, combine};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn read_output(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join(name)).unwrap()
}
#[test]
fn integration_default_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "print(1)").unwrap();
    fs::write(dir.path().join("b.txt"), "hello").unwrap();
    fs::write(dir.path().join("img.png"), [0x89, 0x50, 0x4e, 0x47]).unwrap();
    let result = combine(CombineBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.combined, 2);
    // img.png and the output file itself
    assert_eq!(result.skipped, 2);
    assert_eq!(result.output, dir.path().join("combined.txt"));
    assert_eq!(
        read_output(dir.path(), "combined.txt"),
        "a.py:\nprint(1)\n\nb.txt:\nhello\n\n"
    );
}
#[test]
fn integration_exclude_dirs_prunes_subtree() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("vendor/deep")).unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("vendor/lib.py"), "vendored").unwrap();
    fs::write(dir.path().join("vendor/deep/more.py"), "vendored").unwrap();
    fs::write(dir.path().join("src/app.py"), "app").unwrap();
    let options = CombineBuilder::new(dir.path())
        .extensions([".py"])
        .exclude_dirs(["vendor"])
        .build();
    let result = combine(options).unwrap();
    assert_eq!(result.combined, 1);
    assert_eq!(result.pruned_dirs, 1);
    // only combined.txt was visited and skipped; nothing under vendor/
    assert_eq!(result.skipped, 1);
    let expected = format!("{}:\napp\n\n", Path::new("src").join("app.py").display());
    assert_eq!(read_output(dir.path(), "combined.txt"), expected);
}
#[test]
fn integration_gitignore_overrides_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
    fs::write(dir.path().join("run.log"), "log line").unwrap();
    fs::write(dir.path().join("run.py"), "run()").unwrap();
    let options = CombineBuilder::new(dir.path())
        .extensions([".log", ".py"])
        .use_gitignore(true)
        .build();
    let result = combine(options).unwrap();
    assert_eq!(result.combined, 1);
    assert_eq!(
        read_output(dir.path(), "combined.txt"),
        "run.py:\nrun()\n\n"
    );
}
#[test]
fn integration_gitignore_prunes_directories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "node_modules/\n").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/dep.js"), "dep").unwrap();
    fs::write(dir.path().join("index.js"), "main").unwrap();
    let options = CombineBuilder::new(dir.path()).use_gitignore(true).build();
    let result = combine(options).unwrap();
    assert_eq!(result.combined, 1);
    assert_eq!(result.pruned_dirs, 1);
    assert_eq!(read_output(dir.path(), "combined.txt"), "index.js:\nmain\n\n");
}
#[test]
fn integration_gitignore_flag_off_ignores_patterns() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.md\n").unwrap();
    fs::write(dir.path().join("README.md"), "readme").unwrap();
    let result = combine(CombineBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.combined, 1);
}
#[test]
fn integration_excluded_names_skip_any_extension() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("secret.txt"), "top").unwrap();
    fs::write(dir.path().join("pkg/secret.txt"), "nested").unwrap();
    fs::write(dir.path().join("pkg/open.txt"), "open").unwrap();
    let options = CombineBuilder::new(dir.path())
        .exclude_files(["secret.txt"])
        .build();
    let result = combine(options).unwrap();
    assert_eq!(result.combined, 1);
    let out = read_output(dir.path(), "combined.txt");
    assert!(!out.contains("secret"));
    assert!(out.contains("open"));
}
#[test]
fn integration_rerun_is_identical_and_skips_own_output() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "# Guide\n").unwrap();
    fs::write(dir.path().join("main.js"), "run();\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "remember").unwrap();
    let options = CombineBuilder::new(dir.path()).output("all.txt").build();
    let first = combine(options.clone()).unwrap();
    let first_out = read_output(dir.path(), "all.txt");
    let second = combine(options).unwrap();
    let second_out = read_output(dir.path(), "all.txt");
    assert_eq!(first, second);
    assert_eq!(first_out, second_out);
    assert_eq!(second.combined, 3);
    assert!(!second_out.contains("all.txt:"));
}
#[test]
fn integration_traversal_order_is_by_name() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("c.txt"), "c").unwrap();
    fs::write(dir.path().join("b/inner.txt"), "inner").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    combine(CombineBuilder::new(dir.path()).build()).unwrap();
    let expected = format!(
        "a.txt:\na\n\n{}:\ninner\n\nc.txt:\nc\n\n",
        Path::new("b").join("inner.txt").display()
    );
    assert_eq!(read_output(dir.path(), "combined.txt"), expected);
}
#[test]
fn integration_invalid_utf8_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "fine").unwrap();
    fs::write(dir.path().join("b.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
    fs::write(dir.path().join("c.txt"), "never reached").unwrap();
    let err = combine(CombineBuilder::new(dir.path()).build()).unwrap_err();
    match err {
        CombineError::Read { path, .. } => assert!(path.ends_with("b.txt")),
        other => panic!("unexpected error: {other}"),
    }
    // entries before the failure stay in place
    assert_eq!(read_output(dir.path(), "combined.txt"), "a.txt:\nfine\n\n");
}
#[test]
fn integration_output_in_missing_dir_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let options = CombineBuilder::new(dir.path())
        .output("missing/out.txt")
        .build();
    let err = combine(options).unwrap_err();
    assert!(matches!(err, CombineError::CreateOutput { .. }));
}
#[test]
fn integration_injected_matcher() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("generated")).unwrap();
    fs::write(dir.path().join("generated/api.py"), "gen").unwrap();
    fs::write(dir.path().join("handwritten.py"), "hand").unwrap();
    fs::write(dir.path().join("skip_me.py"), "skip").unwrap();
    let config = Config::from_options(CombineBuilder::new(dir.path()).build())
        .unwrap()
        .with_matcher(|path: &Path, is_dir: bool| {
            (is_dir && path.ends_with("generated")) || path.ends_with("skip_me.py")
        });
    let result = Collector::new(config).run().unwrap();
    assert_eq!(result.combined, 1);
    assert_eq!(result.pruned_dirs, 1);
    assert_eq!(
        read_output(dir.path(), "combined.txt"),
        "handwritten.py:\nhand\n\n"
    );
}
#[cfg(unix)]
#[test]
fn integration_symlinked_dir_not_entered() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    fs::write(dir.path().join("real/x.txt"), "x").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
    let result = combine(CombineBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.combined, 1);
    assert_eq!(result.skipped, 1);
}
#[test]
fn integration_crlf_line_endings_normalized() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("w.txt"), "a\r\nb\r\n").unwrap();
    fs::write(dir.path().join("x.txt"), "old\rmac").unwrap();
    combine(CombineBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        read_output(dir.path(), "combined.txt"),
        "w.txt:\na\nb\n\n\nx.txt:\nold\nmac\n\n"
    );
}
#[test]
fn integration_bad_gitignore_line_is_not_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "a[\n*.log\n").unwrap();
    fs::write(dir.path().join("run.log"), "log line").unwrap();
    fs::write(dir.path().join("run.py"), "run()").unwrap();
    let options = CombineBuilder::new(dir.path())
        .extensions([".log", ".py"])
        .use_gitignore(true)
        .build();
    let result = combine(options).unwrap();
    assert_eq!(result.combined, 1);
    assert_eq!(read_output(dir.path(), "combined.txt"), "run.py:\nrun()\n\n");
}
