//! Typed service wrappers over the REST endpoints

mod discounts;
mod offers;
mod outlets;
mod products;
mod promotional_videos;
mod qr_payments;
mod social_media;
mod team;
mod uploads;

pub use discounts::DiscountsService;
pub use offers::OffersService;
pub use outlets::OutletsService;
pub use products::ProductsService;
pub use promotional_videos::PromotionalVideosService;
pub use qr_payments::QrPaymentsService;
pub use social_media::SocialMediaService;
pub use team::TeamService;
pub use uploads::UploadService;

use crate::http::HttpClient;

/// All services sharing one transport
#[derive(Debug, Clone)]
pub struct Services<C> {
    pub products: ProductsService<C>,
    pub discounts: DiscountsService<C>,
    pub outlets: OutletsService<C>,
    pub offers: OffersService<C>,
    pub team: TeamService<C>,
    pub promotional_videos: PromotionalVideosService<C>,
    pub social_media: SocialMediaService<C>,
    pub qr_payments: QrPaymentsService<C>,
    pub uploads: UploadService<C>,
}

impl<C: HttpClient + Clone> Services<C> {
    pub fn new(http: C) -> Self {
        Self {
            products: ProductsService::new(http.clone()),
            discounts: DiscountsService::new(http.clone()),
            outlets: OutletsService::new(http.clone()),
            offers: OffersService::new(http.clone()),
            team: TeamService::new(http.clone()),
            promotional_videos: PromotionalVideosService::new(http.clone()),
            social_media: SocialMediaService::new(http.clone()),
            qr_payments: QrPaymentsService::new(http.clone()),
            uploads: UploadService::new(http),
        }
    }
}
