use workshop_image::{DockerCli, ImagePusher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let pusher = ImagePusher::new(DockerCli::new());
    pusher.push().await;

    Ok(())
}
