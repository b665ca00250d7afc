#[actix_web::main]
async fn main() {
    if let Err(err) = keyword_stats_lib::run().await {
        eprintln!("keyword-stats: {}", err);
        std::process::exit(1);
    }
}
