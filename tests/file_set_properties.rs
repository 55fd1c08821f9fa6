use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use proptest::prelude::*;
use stylewatch::engine::StyleWatcher;
use stylewatch::fs::mock::MockFileSystem;
use stylewatch::watch::FileSetBuilder;
use stylewatch_test_utils::builders::WatchConfigBuilder;
use stylewatch_test_utils::fake_compiler::FakeCompiler;
use tokio_util::sync::CancellationToken;

const SUBDIRS: [&str; 3] = ["", "partials/", "partials/mixins/"];

// (subdir index, stem, is_scss)
fn layout_strategy() -> impl Strategy<Value = Vec<(usize, String, bool)>> {
    proptest::collection::vec((0..SUBDIRS.len(), "[a-d]{1,3}", any::<bool>()), 1..16)
}

fn materialize(layout: &[(usize, String, bool)]) -> (MockFileSystem, Vec<String>) {
    let fs = MockFileSystem::new();
    let mut rel_paths = Vec::new();
    for (sub, stem, scss) in layout {
        let ext = if *scss { "scss" } else { "txt" };
        let rel = format!("styles/{}{}.{}", SUBDIRS[*sub], stem, ext);
        fs.add_file(Path::new("/proj").join(&rel), stem.as_bytes());
        rel_paths.push(rel);
    }
    (fs, rel_paths)
}

proptest! {
    #[test]
    fn file_set_is_exact_and_deduplicated(
        layout in layout_strategy(),
        explicit in proptest::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let (fs, rel_paths) = materialize(&layout);

        let mut builder = WatchConfigBuilder::new().directory("styles");
        let mut expected: BTreeSet<PathBuf> = rel_paths
            .iter()
            .filter(|rel| rel.ends_with(".scss"))
            .map(|rel| Path::new("/proj").join(rel))
            .collect();
        for idx in &explicit {
            let rel = idx.get(&rel_paths);
            builder = builder.file(rel);
            expected.insert(Path::new("/proj").join(rel));
        }
        let config = builder.build();

        let files = FileSetBuilder::new(Path::new("/proj"), &config, &fs).build();
        prop_assert_eq!(&files, &expected);

        // Two cycles over an unchanged tree: everything compiles once, then nothing.
        let compiler = FakeCompiler::succeeding();
        let watcher = StyleWatcher::new(
            Arc::new(config),
            "/proj",
            Arc::new(fs.clone()),
            Arc::new(compiler.clone()),
        );
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let cancel = CancellationToken::new();

        let first = rt.block_on(watcher.scan_once(&cancel)).unwrap();
        prop_assert_eq!(first.new, expected.len());
        prop_assert_eq!(compiler.take_jobs().len(), expected.len());

        let second = rt.block_on(watcher.scan_once(&cancel)).unwrap();
        prop_assert_eq!(second.unchanged, expected.len());
        prop_assert!(compiler.jobs().is_empty());
    }
}
