#[tokio::main]
async fn main() {
    evm_sim::start_server().await;
}
