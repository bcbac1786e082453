use formfill::{PlaceholderLookup, Settings};
use glob::glob;
use hashbrown::HashMap;
use serde_derive::Deserialize;
use serde_json::from_reader;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct TestSettings {
    pub placeholder_lookup: Option<Vec<String>>,
    pub placeholder_tags: Option<Vec<String>>,
    pub error_suffix: Option<String>,
    pub strict: Option<bool>,
}

impl TestSettings {
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(lookup) = &self.placeholder_lookup {
            settings.placeholder_lookup = lookup
                .iter()
                .map(|attr| match attr.as_str() {
                    "id" => PlaceholderLookup::ID,
                    "name" => PlaceholderLookup::NAME,
                    _ => panic!("Unknown placeholder lookup attribute: {attr}"),
                })
                .collect();
        }

        if let Some(tags) = &self.placeholder_tags {
            settings.placeholder_tags = tags.clone();
        }

        if let Some(suffix) = &self.error_suffix {
            settings.error_suffix = suffix.clone();
        }

        if let Some(strict) = self.strict {
            settings.strict = strict;
        }

        settings
    }
}

#[derive(Deserialize, Debug)]
pub struct TestCase {
    pub description: String,
    pub input: String,
    #[serde(default)]
    pub values: HashMap<String, String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
    #[serde(default)]
    pub settings: TestSettings,
    /// `None` if the input is expected to be rejected by the parser.
    pub expected: Option<String>,
}

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn for_each_test_file(pattern: &str, handler: &mut dyn FnMut(&Path, File)) {
    let pattern = fixtures_dir().join(pattern);

    for path in glob(pattern.to_str().unwrap()).unwrap() {
        let path = path.unwrap();
        let file = File::open(&path).unwrap();

        handler(&path, file);
    }
}

pub fn get_test_cases(pattern: &str) -> Vec<TestCase> {
    let mut test_cases = Vec::new();

    for_each_test_file(pattern, &mut |path, file| {
        let suite = path.file_stem().unwrap().to_string_lossy().into_owned();

        for mut test_case in from_reader::<_, Vec<TestCase>>(file).unwrap() {
            test_case.description = format!("{suite}: {}", test_case.description);
            test_cases.push(test_case);
        }
    });

    test_cases
}
