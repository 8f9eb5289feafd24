//! Event, news and gallery model → entity mappers

use portal_core::{Event, GalleryItem, NewsItem};

use crate::models::{EventModel, GalleryItemModel, NewsModel};

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            title: model.title,
            category: model.category,
            description: model.description,
            date: model.event_date,
            time_start: model.time_start,
            location_name: model.location_name,
            registration_link: model.registration_link,
            poster: model.poster,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<NewsModel> for NewsItem {
    fn from(model: NewsModel) -> Self {
        NewsItem {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            category: model.category,
            image: model.image,
            date: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<GalleryItemModel> for GalleryItem {
    fn from(model: GalleryItemModel) -> Self {
        GalleryItem {
            id: model.id,
            caption: model.caption,
            tag: model.tag,
            author: model.author,
            image: model.image,
            date: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
