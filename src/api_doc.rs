use utoipa::OpenApi;

use crate::domains::wallet::models::*;
use crate::routes::health::HealthResponse;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::domains::wallet::handlers::wallet_handler::create_wallet,
        crate::domains::wallet::handlers::wallet_handler::get_wallet,
        crate::domains::wallet::handlers::wallet_handler::perform_operation
    ),
    components(schemas(
        CreateWalletRequest,
        WalletResponse,
        OperationRequest,
        OperationResponse,
        OperationType,
        HealthResponse
    )),
    tags(
        (name = "Wallets", description = "Wallet API endpoints (create, get, deposit/withdraw)"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Wallet API Server",
        description = "Wallet balance service with fixed-point balances",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
