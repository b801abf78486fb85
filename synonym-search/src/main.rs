use form::SynonymForm;
use synonyms::SynonymClient;
use utilities::input;

mod form;
mod utilities;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let base_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
    let client = SynonymClient::new(base_url);
    let mut form = SynonymForm::default();

    println!("Synonym Search Tool (backend: {})", client.base_url());
    print_help();
    loop {
        let line = input(">> ")?;
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "add" => {
                    add_word(&client, &mut form).await?;
                }
                "search" | "find" => {
                    form.search_word = command_parts.collect::<Vec<&str>>().join(" ");
                    search_word(&client, &mut form).await;
                }
                "help" | "h" => {
                    print_help();
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

async fn add_word(client: &SynonymClient, form: &mut SynonymForm) -> anyhow::Result<()> {
    form.word = input("Word: ")?;
    form.synonyms = input("Synonyms (comma-separated): ")?;
    if form.submit_add(client).await {
        println!("Word and synonyms added!");
    } else if let Some(error) = &form.error {
        println!("{error}");
    }
    Ok(())
}

async fn search_word(client: &SynonymClient, form: &mut SynonymForm) {
    if form.submit_search(client).await {
        print_result(form);
    } else if let Some(error) = &form.error {
        println!("{error}");
    }
}

fn print_result(form: &SynonymForm) {
    if form.result.is_empty() {
        println!("No synonyms stored for '{}'.", form.search_word);
        return;
    }
    println!("Synonyms for '{}':", form.search_word);
    for synonym in &form.result {
        println!("    {synonym}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("    add - add a word with comma-separated synonyms");
    println!("    search <word> - look up the synonyms of a word");
    println!("    help - show this list");
    println!("    exit - leave");
}
