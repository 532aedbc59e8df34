use crate::{api::payslip, config::Config};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter config
    fn build_limiter(requests_per_min: u32) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap()
    }

    let submit_limiter = build_limiter(config.rate_submit_per_min);
    let default_limiter = build_limiter(config.rate_default_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::resource("/payslip")
                    .wrap(Governor::new(&submit_limiter))
                    .route(web::post().to(payslip::submit_payslip)),
            )
            .service(
                web::resource("/payslips/all")
                    .wrap(Governor::new(&default_limiter))
                    .route(web::get().to(payslip::list_payslips)),
            )
            .service(
                web::resource("/payslip/approve/{id}")
                    .wrap(Governor::new(&default_limiter))
                    .route(web::put().to(payslip::approve_payslip)),
            )
            .service(
                web::resource("/payslip/reject/{id}")
                    .wrap(Governor::new(&default_limiter))
                    .route(web::put().to(payslip::reject_payslip)),
            ),
    );
}
