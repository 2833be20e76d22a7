// Entrypoint for the CrystalIA oracle.
// - Resolves the API key once, then hands a configured client to the form.
// - Returns `anyhow::Result` so startup failures (e.g. missing logo) are
//   reported with context.

use crystalia_cli::{
    api::GeminiClient,
    config::{resolve_credential, Resolution, SecretStore, Settings},
    logging, render,
    ui::{self, Logo},
};

fn main() -> anyhow::Result<()> {
    logging::init();

    // Endpoint, secrets file and logo path come from the environment, with
    // defaults. See `config::Settings::from_env`.
    let settings = Settings::from_env();

    let store = if settings.secrets_path.exists() {
        match SecretStore::load(&settings.secrets_path) {
            Ok(store) => Some(store),
            Err(e) => {
                let detail = format!("{:#}", e);
                tracing::warn!(error = %detail, "ignoring unreadable secrets file");
                None
            }
        }
    } else {
        None
    };

    let credential = match resolve_credential(store.as_ref(), ui::ask_api_key)? {
        Resolution::Ready(credential, source) => {
            tracing::debug!(?source, "API key resolved");
            credential
        }
        Resolution::Halt => {
            println!("{}", render::info(ui::KEY_REQUIRED));
            return Ok(());
        }
    };

    let logo = Logo::load(&settings.logo_path)?;
    let client = GeminiClient::from_settings(&settings, credential)?;

    ui::banner(&logo);

    // Blocks until the user chooses "Exit".
    ui::main_form(&client, true)?;
    Ok(())
}
