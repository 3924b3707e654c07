use renewal_keeper_api::Application;
use renewal_keeper_infra::KeeperContext;
use renewal_keeper_sdk::KeeperSDK;

pub const PASSWORD: &str = "correct horse battery staple";

pub struct TestApp {
    pub ctx: KeeperContext,
    pub address: String,
}

impl TestApp {
    /// An sdk that is logged in with a fresh session
    pub async fn logged_in_sdk(&self) -> KeeperSDK {
        let res = KeeperSDK::new(self.address.clone())
            .auth
            .verify_password(PASSWORD)
            .await
            .expect("Expected to log in");
        KeeperSDK::with_session(self.address.clone(), res.token.expect("Expected a token"))
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, KeeperSDK) {
    let mut ctx = KeeperContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.repos
        .password
        .save(PASSWORD)
        .await
        .expect("Expected to store the password");

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = KeeperSDK::new(address.clone());
    (TestApp { ctx, address }, sdk)
}
