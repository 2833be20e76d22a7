use crystalia_cli::config::{
    resolve_credential, Credential, CredentialSource, Resolution, SecretStore,
};
use std::io::Write;

#[test]
fn key_is_read_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# deployment secrets").unwrap();
    writeln!(file, "GOOGLE_API_KEY = \"from-file\"").unwrap();

    let store = SecretStore::load(file.path()).unwrap();
    let res = resolve_credential(Some(&store), || panic!("should not prompt")).unwrap();
    assert_eq!(
        res,
        Resolution::Ready(Credential::new("from-file").unwrap(), CredentialSource::SecretsFile)
    );
}

#[test]
fn file_without_key_prompts() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "OTHER_SECRET = \"x\"").unwrap();

    let store = SecretStore::load(file.path()).unwrap();
    let res = resolve_credential(Some(&store), || Ok("typed-key".to_string())).unwrap();
    assert_eq!(
        res,
        Resolution::Ready(Credential::new("typed-key").unwrap(), CredentialSource::Prompt)
    );
}

#[test]
fn malformed_file_is_an_error_naming_the_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "GOOGLE_API_KEY = ").unwrap();

    let err = SecretStore::load(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains(&file.path().display().to_string()));
}

#[test]
fn empty_prompt_halts() {
    let res = resolve_credential(None, || Ok(String::new())).unwrap();
    assert_eq!(res, Resolution::Halt);
}

#[test]
fn prompt_failure_propagates() {
    let res = resolve_credential(None, || Err(anyhow::anyhow!("not a terminal")));
    assert!(res.is_err());
}
