//! Runs every instance in `tests/regression`.
//!
//! Each `<name>.in` is an instance file. If there's a `<name>.out` next to
//! it, separating the instance must produce exactly that solution file. If
//! there's a `<name>.err` instead, reading the instance must fail with that
//! message.

use libtest_mimic::{Arguments, Failed, Trial};
use linesep::{Separator, SeparatorConfig};
use linesep_util::{read_instance, verify, InstanceError};
use std::path::{Path, PathBuf};

fn main() {
    let args = Arguments::from_args();
    let tests = regression_tests();

    libtest_mimic::run(&args, tests).exit();
}

fn regression_tests() -> Vec<Trial> {
    let ws = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let file_paths = glob::glob(&format!("{ws}/tests/regression/*.in")).unwrap();

    file_paths
        .into_iter()
        .map(|p| {
            let p = p.unwrap();
            let name = p.file_stem().unwrap().to_string_lossy().into_owned();
            Trial::test(name, move || run_case(&p))
        })
        .collect()
}

fn sibling(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

fn run_case(input: &Path) -> Result<(), Failed> {
    let config = SeparatorConfig::default();
    let expected_out = sibling(input, "out");
    let expected_err = sibling(input, "err");

    match read_instance(input, &config) {
        Ok(registry) => {
            let expected = std::fs::read_to_string(&expected_out)
                .map_err(|e| format!("no expected output for a valid instance: {e}"))?;
            let separation = Separator::new(registry.clone(), &config).run();

            let unseparated = verify(&registry, separation.lines());
            if !unseparated.is_empty() {
                return Err(format!("unseparated pairs: {unseparated:?}").into());
            }
            let actual = separation.solution_text();
            if actual != expected {
                return Err(format!("expected\n{expected}\ngot\n{actual}").into());
            }
            Ok(())
        }
        Err(InstanceError::Invalid { source, .. }) => {
            let expected = std::fs::read_to_string(&expected_err)
                .map_err(|_| format!("unexpected error: {source}"))?;
            if expected.trim() != source.to_string() {
                return Err(format!("expected error {expected:?}, got {source}").into());
            }
            Ok(())
        }
        Err(e) => Err(format!("unexpected error: {e}").into()),
    }
}
