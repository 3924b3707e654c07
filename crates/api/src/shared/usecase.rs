use renewal_keeper_infra::KeeperContext;
use std::fmt::Debug;
use tracing::error;

#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;

    type Error: Debug;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx))]
pub async fn execute<U>(mut usecase: U, ctx: &KeeperContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case `{}` failed: {:?}", U::NAME, e);
    }

    res
}
