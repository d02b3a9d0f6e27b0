use workshop_image::{DockerCli, ImageBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let builder = ImageBuilder::new(DockerCli::new());
    builder.build().await;

    Ok(())
}
