use super::{
    AddressComparer, ArtifactContentComparer, ArtifactLocationComparer, LocationComparer,
    LogicalLocationComparer, MessageComparer, PhysicalLocationComparer, RegionComparer,
    ReportingDescriptorReferenceComparer, ResultComparer, StackComparer, StackFrameComparer,
    INDEX, PROPERTIES, RANK, SCALAR, TEXT, TEXTS, TEXT_MAP, URI, URIS,
};
use crate::compare::{list, nullable, reference_compares, Comparer, ListComparer, Natural};
use crate::model::{
    Address, Location, LogicalLocation, PhysicalLocation, Region, SarifResult, Stack, StackFrame,
};
use std::cmp::Ordering;

impl Comparer<SarifResult> for ResultComparer {
    fn compare(&self, left: &SarifResult, right: &SarifResult) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        let locations = list(LocationComparer);
        TEXT.compare(&left.rule_id, &right.rule_id)
            .then_with(|| INDEX.compare(&left.rule_index, &right.rule_index))
            .then_with(|| {
                nullable(ReportingDescriptorReferenceComparer).compare(&left.rule, &right.rule)
            })
            .then_with(|| Natural.compare(&left.kind, &right.kind))
            .then_with(|| Natural.compare(&left.level, &right.level))
            .then_with(|| MessageComparer.compare(&left.message, &right.message))
            .then_with(|| {
                nullable(ArtifactLocationComparer)
                    .compare(&left.analysis_target, &right.analysis_target)
            })
            .then_with(|| locations.compare(&left.locations, &right.locations))
            .then_with(|| TEXT.compare(&left.guid, &right.guid))
            .then_with(|| TEXT.compare(&left.correlation_guid, &right.correlation_guid))
            .then_with(|| SCALAR.compare(&left.occurrence_count, &right.occurrence_count))
            .then_with(|| TEXT_MAP.compare(&left.partial_fingerprints, &right.partial_fingerprints))
            .then_with(|| TEXT_MAP.compare(&left.fingerprints, &right.fingerprints))
            .then_with(|| list(StackComparer).compare(&left.stacks, &right.stacks))
            .then_with(|| locations.compare(&left.related_locations, &right.related_locations))
            .then_with(|| SCALAR.compare(&left.baseline_state, &right.baseline_state))
            .then_with(|| RANK.compare(&left.rank, &right.rank))
            .then_with(|| URI.compare(&left.hosted_viewer_uri, &right.hosted_viewer_uri))
            .then_with(|| URIS.compare(&left.work_item_uris, &right.work_item_uris))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Location> for LocationComparer {
    fn compare(&self, left: &Location, right: &Location) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        INDEX
            .compare(&left.id, &right.id)
            .then_with(|| {
                nullable(PhysicalLocationComparer)
                    .compare(&left.physical_location, &right.physical_location)
            })
            .then_with(|| {
                list(LogicalLocationComparer)
                    .compare(&left.logical_locations, &right.logical_locations)
            })
            .then_with(|| nullable(MessageComparer).compare(&left.message, &right.message))
            .then_with(|| list(RegionComparer).compare(&left.annotations, &right.annotations))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<PhysicalLocation> for PhysicalLocationComparer {
    fn compare(&self, left: &PhysicalLocation, right: &PhysicalLocation) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        let region = nullable(RegionComparer);
        nullable(AddressComparer)
            .compare(&left.address, &right.address)
            .then_with(|| {
                nullable(ArtifactLocationComparer)
                    .compare(&left.artifact_location, &right.artifact_location)
            })
            .then_with(|| region.compare(&left.region, &right.region))
            .then_with(|| region.compare(&left.context_region, &right.context_region))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Region> for RegionComparer {
    fn compare(&self, left: &Region, right: &Region) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        SCALAR
            .compare(&left.start_line, &right.start_line)
            .then_with(|| SCALAR.compare(&left.start_column, &right.start_column))
            .then_with(|| SCALAR.compare(&left.end_line, &right.end_line))
            .then_with(|| SCALAR.compare(&left.end_column, &right.end_column))
            .then_with(|| INDEX.compare(&left.char_offset, &right.char_offset))
            .then_with(|| SCALAR.compare(&left.char_length, &right.char_length))
            .then_with(|| INDEX.compare(&left.byte_offset, &right.byte_offset))
            .then_with(|| SCALAR.compare(&left.byte_length, &right.byte_length))
            .then_with(|| nullable(ArtifactContentComparer).compare(&left.snippet, &right.snippet))
            .then_with(|| nullable(MessageComparer).compare(&left.message, &right.message))
            .then_with(|| TEXT.compare(&left.source_language, &right.source_language))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<LogicalLocation> for LogicalLocationComparer {
    fn compare(&self, left: &LogicalLocation, right: &LogicalLocation) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        TEXT.compare(&left.name, &right.name)
            .then_with(|| INDEX.compare(&left.index, &right.index))
            .then_with(|| TEXT.compare(&left.fully_qualified_name, &right.fully_qualified_name))
            .then_with(|| TEXT.compare(&left.decorated_name, &right.decorated_name))
            .then_with(|| INDEX.compare(&left.parent_index, &right.parent_index))
            .then_with(|| TEXT.compare(&left.kind, &right.kind))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Address> for AddressComparer {
    fn compare(&self, left: &Address, right: &Address) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        INDEX
            .compare(&left.absolute_address, &right.absolute_address)
            .then_with(|| SCALAR.compare(&left.relative_address, &right.relative_address))
            .then_with(|| SCALAR.compare(&left.length, &right.length))
            .then_with(|| TEXT.compare(&left.kind, &right.kind))
            .then_with(|| TEXT.compare(&left.name, &right.name))
            .then_with(|| TEXT.compare(&left.fully_qualified_name, &right.fully_qualified_name))
            .then_with(|| SCALAR.compare(&left.offset_from_parent, &right.offset_from_parent))
            .then_with(|| INDEX.compare(&left.index, &right.index))
            .then_with(|| INDEX.compare(&left.parent_index, &right.parent_index))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Stack> for StackComparer {
    fn compare(&self, left: &Stack, right: &Stack) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        nullable(MessageComparer)
            .compare(&left.message, &right.message)
            .then_with(|| ListComparer(StackFrameComparer).compare(&left.frames, &right.frames))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<StackFrame> for StackFrameComparer {
    fn compare(&self, left: &StackFrame, right: &StackFrame) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        nullable(LocationComparer)
            .compare(&left.location, &right.location)
            .then_with(|| TEXT.compare(&left.module, &right.module))
            .then_with(|| SCALAR.compare(&left.thread_id, &right.thread_id))
            .then_with(|| TEXTS.compare(&left.parameters, &right.parameters))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}
