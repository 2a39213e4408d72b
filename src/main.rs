use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    lunchmoney_amazon_matcher::logger::init();
    let args = lunchmoney_amazon_matcher::args::parse();
    lunchmoney_amazon_matcher::cli::main(args).await
}
