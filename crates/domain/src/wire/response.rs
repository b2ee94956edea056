use super::message::{DnsHeader, Query, HEADER_LEN};

/// TTL stamped on locally answered records.
pub const DEFAULT_TTL: u32 = 60;

/// Answer record size past the owner name: type, class, ttl, rdlength, rdata.
const ANSWER_FIXED_LEN: usize = 14;

/// Builds the wire form of a single-answer A response to `query`.
///
/// The transaction id and the question's qname/qtype/qclass bytes are copied
/// verbatim from the query. The one answer record repeats the owner name in
/// full; no pointer compression is emitted, which is acceptable because the
/// name occurs exactly twice and never refers elsewhere.
pub fn encode_response(query: &Query, ttl: u32, rdata: u32) -> Vec<u8> {
    let qname = &query.question.qname;
    let question_len = qname.len() + 4;
    let mut buf =
        Vec::with_capacity(HEADER_LEN + question_len + qname.len() + ANSWER_FIXED_LEN);

    let header = DnsHeader::response_to(&query.header);
    buf.extend_from_slice(&header.id);
    buf.extend_from_slice(&header.flag_bytes());
    buf.extend_from_slice(&header.qdcount.to_be_bytes());
    buf.extend_from_slice(&header.ancount.to_be_bytes());
    buf.extend_from_slice(&header.nscount.to_be_bytes());
    buf.extend_from_slice(&header.arcount.to_be_bytes());

    buf.extend_from_slice(qname);
    buf.extend_from_slice(&query.question.qtype);
    buf.extend_from_slice(&query.question.qclass);

    // Single A/IN answer, owner name repeated verbatim.
    buf.extend_from_slice(qname);
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&4u16.to_be_bytes());
    buf.extend_from_slice(&rdata.to_be_bytes());

    buf
}
