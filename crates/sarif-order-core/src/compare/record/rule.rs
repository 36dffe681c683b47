use super::{
    MessageComparer, MultiformatMessageStringComparer, ReportingConfigurationComparer,
    ReportingDescriptorComparer, ReportingDescriptorReferenceComparer,
    ReportingDescriptorRelationshipComparer, ToolComponentReferenceComparer, INDEX, PROPERTIES,
    RANK, SCALAR, TEXT, TEXTS, URI,
};
use crate::compare::{list, map, nullable, reference_compares, Comparer, Natural};
use crate::model::{
    ReportingConfiguration, ReportingDescriptor, ReportingDescriptorReference,
    ReportingDescriptorRelationship,
};
use std::cmp::Ordering;

impl Comparer<ReportingDescriptor> for ReportingDescriptorComparer {
    fn compare(&self, left: &ReportingDescriptor, right: &ReportingDescriptor) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        let text = nullable(MultiformatMessageStringComparer);
        TEXT.compare(&left.id, &right.id)
            .then_with(|| TEXTS.compare(&left.deprecated_ids, &right.deprecated_ids))
            .then_with(|| TEXT.compare(&left.guid, &right.guid))
            .then_with(|| TEXTS.compare(&left.deprecated_guids, &right.deprecated_guids))
            .then_with(|| TEXT.compare(&left.name, &right.name))
            .then_with(|| TEXTS.compare(&left.deprecated_names, &right.deprecated_names))
            .then_with(|| text.compare(&left.short_description, &right.short_description))
            .then_with(|| text.compare(&left.full_description, &right.full_description))
            .then_with(|| {
                map(MultiformatMessageStringComparer)
                    .compare(&left.message_strings, &right.message_strings)
            })
            .then_with(|| {
                nullable(ReportingConfigurationComparer)
                    .compare(&left.default_configuration, &right.default_configuration)
            })
            .then_with(|| URI.compare(&left.help_uri, &right.help_uri))
            .then_with(|| text.compare(&left.help, &right.help))
            .then_with(|| {
                list(ReportingDescriptorRelationshipComparer)
                    .compare(&left.relationships, &right.relationships)
            })
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<ReportingConfiguration> for ReportingConfigurationComparer {
    fn compare(&self, left: &ReportingConfiguration, right: &ReportingConfiguration) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        Natural
            .compare(&left.enabled, &right.enabled)
            .then_with(|| Natural.compare(&left.level, &right.level))
            .then_with(|| RANK.compare(&left.rank, &right.rank))
            .then_with(|| PROPERTIES.compare(&left.parameters, &right.parameters))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<ReportingDescriptorReference> for ReportingDescriptorReferenceComparer {
    fn compare(
        &self,
        left: &ReportingDescriptorReference,
        right: &ReportingDescriptorReference,
    ) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        TEXT.compare(&left.id, &right.id)
            .then_with(|| INDEX.compare(&left.index, &right.index))
            .then_with(|| TEXT.compare(&left.guid, &right.guid))
            .then_with(|| {
                nullable(ToolComponentReferenceComparer)
                    .compare(&left.tool_component, &right.tool_component)
            })
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<ReportingDescriptorRelationship> for ReportingDescriptorRelationshipComparer {
    fn compare(
        &self,
        left: &ReportingDescriptorRelationship,
        right: &ReportingDescriptorRelationship,
    ) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        ReportingDescriptorReferenceComparer
            .compare(&left.target, &right.target)
            .then_with(|| TEXTS.compare(&left.kinds, &right.kinds))
            .then_with(|| nullable(MessageComparer).compare(&left.description, &right.description))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}
