//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use portal_core::{Division, Event, GalleryItem, NewsItem, Officer};

use super::responses::{
    DivisionResponse, EventResponse, GalleryResponse, NewsResponse, OfficerResponse,
    PublicOfficerResponse, RecentItemResponse, SessionUserResponse,
};

/// Byline shown for events on the dashboard feed
const EVENT_FEED_AUTHOR: &str = "Admin";
/// Category shown for news on the dashboard feed
const NEWS_FEED_CATEGORY: &str = "News";

// ============================================================================
// Officer Mappers
// ============================================================================

impl From<&Officer> for OfficerResponse {
    fn from(officer: &Officer) -> Self {
        Self {
            id: officer.id,
            name: officer.name.clone(),
            member_id: officer.member_id.clone(),
            position: officer.position.as_str().to_string(),
            division_id: officer.division_id,
            division: officer.division_name.clone(),
            access_role: officer.access_role,
            image: officer.image.clone(),
            is_active: officer.is_active,
            must_change_password: officer.must_change_password,
            sort_order: officer.sort_order,
            created_at: officer.created_at,
        }
    }
}

impl From<Officer> for OfficerResponse {
    fn from(officer: Officer) -> Self {
        Self::from(&officer)
    }
}

impl From<&Officer> for PublicOfficerResponse {
    fn from(officer: &Officer) -> Self {
        Self {
            id: officer.id,
            name: officer.name.clone(),
            position: officer.position.as_str().to_string(),
            image: officer.image.clone(),
        }
    }
}

impl From<&Officer> for SessionUserResponse {
    fn from(officer: &Officer) -> Self {
        Self {
            name: officer.name.clone(),
            role: officer.access_role,
            member_id: officer.member_id.clone(),
            image: officer.image.clone(),
        }
    }
}

impl From<Division> for DivisionResponse {
    fn from(division: Division) -> Self {
        Self {
            id: division.id,
            name: division.name,
            is_board: division.is_board,
        }
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            category: event.category,
            description: event.description,
            date: event.date,
            time_start: event.time_start,
            location_name: event.location_name,
            registration_link: event.registration_link,
            poster: event.poster,
            created_at: event.created_at,
        }
    }
}

impl From<NewsItem> for NewsResponse {
    fn from(news: NewsItem) -> Self {
        Self {
            id: news.id,
            title: news.title,
            content: news.content,
            author: news.author,
            category: news.category,
            image: news.image,
            date: news.date,
            created_at: news.created_at,
        }
    }
}

impl From<GalleryItem> for GalleryResponse {
    fn from(item: GalleryItem) -> Self {
        Self {
            id: item.id,
            caption: item.caption,
            tag: item.tag,
            author: item.author,
            image: item.image,
            date: item.date,
        }
    }
}

// ============================================================================
// Dashboard Feed Mappers
// ============================================================================

impl From<Event> for RecentItemResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date,
            category: event.category,
            author: EVENT_FEED_AUTHOR.to_string(),
        }
    }
}

impl From<NewsItem> for RecentItemResponse {
    fn from(news: NewsItem) -> Self {
        Self {
            id: news.id,
            title: news.title,
            date: news.date.date_naive(),
            category: NEWS_FEED_CATEGORY.to_string(),
            author: news.author,
        }
    }
}

impl From<GalleryItem> for RecentItemResponse {
    fn from(item: GalleryItem) -> Self {
        Self {
            id: item.id,
            title: item.caption,
            date: item.date.date_naive(),
            category: item.tag,
            author: item.author,
        }
    }
}
