use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lnkscan::{
    run, scan, Config, Entry, EntryKind, KeywordSet, LnkError, Matcher, ShortcutMatcher,
    WalkConfig, WriteOutcome, DEFAULT_KEYWORDS,
};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a temporary directory tree for testing.
///
/// Structure:
/// ```
/// tmp/
///   Relatorio LGPD Anual.lnk
///   notas.txt
///   Ronda.LNK
///   backup.lnk
///   rh/
///     srvtcp_config.lnk
///     Cargos e Salários.lnk
///     juridico-sem-acento.lnk
/// ```
fn setup_test_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("Relatorio LGPD Anual.lnk"), "").unwrap();
    fs::write(root.join("notas.txt"), "lgpd").unwrap();
    fs::write(root.join("Ronda.LNK"), "").unwrap();
    fs::write(root.join("backup.lnk"), "").unwrap();

    let sub = root.join("rh");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("srvtcp_config.lnk"), "").unwrap();
    fs::write(sub.join("Cargos e Salários.lnk"), "").unwrap();
    fs::write(sub.join("juridico-sem-acento.lnk"), "").unwrap();

    dir
}

fn shipped_matcher() -> Arc<dyn Matcher> {
    Arc::new(ShortcutMatcher::new(".lnk", KeywordSet::new(DEFAULT_KEYWORDS)))
}

fn file_names(paths: &[PathBuf]) -> BTreeSet<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

fn config_for(roots: &[&Path], output: &Path) -> Config {
    Config::builder()
        .roots(roots.iter().copied())
        .output(output)
        .build()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn finds_keyword_shortcuts_only() {
    let dir = setup_test_dir();
    let report = scan(dir.path(), shipped_matcher(), &WalkConfig::default());

    let expected: BTreeSet<String> = [
        "Relatorio LGPD Anual.lnk",
        "srvtcp_config.lnk",
        "Cargos e Salários.lnk",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    assert_eq!(file_names(&report.paths), expected);
    assert!(report.errors.is_empty());
}

#[test]
fn agrees_with_an_independent_walk() {
    let dir = setup_test_dir();
    let matcher = ShortcutMatcher::new(".lnk", KeywordSet::new(DEFAULT_KEYWORDS));

    let reference: BTreeSet<PathBuf> = walkdir::WalkDir::new(dir.path())
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| !e.file_type().is_dir())
        .filter(|e| matcher.matches_name(&e.file_name().to_string_lossy()))
        .map(|e| e.path().to_path_buf())
        .collect();

    let config = WalkConfig { threads: 4, max_depth: None };
    let report = scan(dir.path(), shipped_matcher(), &config);
    let found: BTreeSet<PathBuf> = report.paths.into_iter().collect();

    assert_eq!(found, reference);
}

#[test]
fn repeated_scans_find_the_same_set() {
    let dir = setup_test_dir();
    let config = WalkConfig { threads: 3, max_depth: None };

    let first = scan(dir.path(), shipped_matcher(), &config);
    let second = scan(dir.path(), shipped_matcher(), &config);

    let a: BTreeSet<_> = first.paths.into_iter().collect();
    let b: BTreeSet<_> = second.paths.into_iter().collect();
    assert_eq!(a, b);
}

#[test]
fn custom_matcher_drives_the_same_walk() {
    struct TextMatcher;
    impl Matcher for TextMatcher {
        fn is_match(&self, entry: &Entry) -> bool {
            entry.kind == EntryKind::File && entry.name.ends_with(".txt")
        }
    }

    let dir = setup_test_dir();
    let report = scan(dir.path(), Arc::new(TextMatcher), &WalkConfig::default());

    assert_eq!(report.paths.len(), 1);
    assert!(report.paths[0].to_string_lossy().ends_with("notas.txt"));
}

#[test]
fn output_follows_root_order() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let third = tempfile::tempdir().unwrap();

    // Give the first root the most work so it is unlikely to finish first.
    for i in 0..200 {
        let d = first.path().join(format!("d{i}"));
        fs::create_dir(&d).unwrap();
        fs::write(d.join("filler.txt"), "").unwrap();
    }
    fs::write(first.path().join("a LGPD.lnk"), "").unwrap();
    fs::write(second.path().join("b srvtcp.lnk"), "").unwrap();
    fs::write(third.path().join("c Jurídico.lnk"), "").unwrap();

    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("resultado_atalhos.txt");
    let config = config_for(&[first.path(), second.path(), third.path()], &dest);

    let report = run(&config);

    let expected = format!(
        "{};{};{};",
        first.path().join("a LGPD.lnk").display(),
        second.path().join("b srvtcp.lnk").display(),
        third.path().join("c Jurídico.lnk").display(),
    );
    assert_eq!(fs::read_to_string(&dest).unwrap(), expected);
    assert!(matches!(report.write, WriteOutcome::Written(3)));
    assert_eq!(report.scans.len(), 3);
    assert_eq!(report.scans[0].root, first.path());
}

#[test]
fn missing_roots_do_not_stop_the_run() {
    let dir = setup_test_dir();
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("out.txt");
    let missing = out.path().join("E-Users");

    let config = config_for(&[missing.as_path(), dir.path()], &dest);
    let report = run(&config);

    assert_eq!(report.match_count(), 3);
    assert!(report.scans[0].paths.is_empty());
    assert_eq!(report.scans[0].errors.len(), 1);
    assert!(report.scans[0].errors[0].is_recoverable());
    assert!(matches!(report.write, WriteOutcome::Written(3)));
}

#[test]
fn no_matches_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("backup.lnk"), "").unwrap();
    fs::write(dir.path().join("Ronda Senior.LNK"), "").unwrap();

    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("out.txt");
    fs::write(&dest, "previous run;").unwrap();

    let report = run(&config_for(&[dir.path()], &dest));

    assert!(matches!(report.write, WriteOutcome::SkippedEmpty));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "previous run;");
}

#[test]
fn no_matches_does_not_create_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("out.txt");

    run(&config_for(&[dir.path()], &dest));

    assert!(!dest.exists());
}

#[cfg(unix)]
#[test]
fn unreadable_subtree_is_skipped_and_siblings_scanned() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    let open = dir.path().join("open");
    fs::create_dir(&locked).unwrap();
    fs::create_dir(&open).unwrap();
    fs::write(locked.join("lgpd a.lnk"), "").unwrap();
    fs::write(open.join("lgpd b.lnk"), "").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through mode 000; nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = scan(dir.path(), shipped_matcher(), &WalkConfig::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(report.paths, vec![open.join("lgpd b.lnk")]);
    assert!(
        report
            .errors
            .iter()
            .any(|e| matches!(e, LnkError::PermissionDenied(p) if p == &locked)),
        "errors: {:?}",
        report.errors
    );
}
