use super::{
    ArtifactComparer, ArtifactContentComparer, ArtifactLocationComparer, MessageComparer,
    MultiformatMessageStringComparer, INDEX, PROPERTIES, SCALAR, TEXT, TEXT_MAP, URI,
};
use crate::compare::{list, nullable, reference_compares, Comparer, Natural};
use crate::model::{Artifact, ArtifactContent, ArtifactLocation};
use std::cmp::Ordering;

impl Comparer<ArtifactLocation> for ArtifactLocationComparer {
    fn compare(&self, left: &ArtifactLocation, right: &ArtifactLocation) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        URI.compare(&left.uri, &right.uri)
            .then_with(|| TEXT.compare(&left.uri_base_id, &right.uri_base_id))
            .then_with(|| INDEX.compare(&left.index, &right.index))
            .then_with(|| nullable(MessageComparer).compare(&left.description, &right.description))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<ArtifactContent> for ArtifactContentComparer {
    fn compare(&self, left: &ArtifactContent, right: &ArtifactContent) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        TEXT.compare(&left.text, &right.text)
            .then_with(|| TEXT.compare(&left.binary, &right.binary))
            .then_with(|| {
                nullable(MultiformatMessageStringComparer).compare(&left.rendered, &right.rendered)
            })
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Artifact> for ArtifactComparer {
    fn compare(&self, left: &Artifact, right: &Artifact) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        nullable(MessageComparer)
            .compare(&left.description, &right.description)
            .then_with(|| {
                nullable(ArtifactLocationComparer).compare(&left.location, &right.location)
            })
            .then_with(|| INDEX.compare(&left.parent_index, &right.parent_index))
            .then_with(|| SCALAR.compare(&left.offset, &right.offset))
            .then_with(|| INDEX.compare(&left.length, &right.length))
            .then_with(|| list(Natural).compare(&left.roles, &right.roles))
            .then_with(|| TEXT.compare(&left.mime_type, &right.mime_type))
            .then_with(|| {
                nullable(ArtifactContentComparer).compare(&left.contents, &right.contents)
            })
            .then_with(|| TEXT.compare(&left.encoding, &right.encoding))
            .then_with(|| TEXT.compare(&left.source_language, &right.source_language))
            .then_with(|| TEXT_MAP.compare(&left.hashes, &right.hashes))
            .then_with(|| TEXT.compare(&left.last_modified_time_utc, &right.last_modified_time_utc))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}
