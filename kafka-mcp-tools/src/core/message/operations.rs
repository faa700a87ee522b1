/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Message operations - Core business logic

use std::time::Duration;

use kafka_mcp_error::KafkaMcpResult;
use kafka_mcp_error::TransportError;

use super::types::PublishMetadata;
use super::types::PublishRecord;
use crate::admin::MessagePublisher;

/// Message operations service
pub struct MessageService;

impl MessageService {
    /// Publish one record and wait for its acknowledgment
    ///
    /// The wait is bounded by `timeout` on top of the publisher's own queue
    /// timeout, so a stuck publisher still yields a timeout error.
    pub async fn send<P: MessagePublisher>(
        publisher: &P,
        record: &PublishRecord,
        timeout: Duration,
    ) -> KafkaMcpResult<PublishMetadata> {
        match tokio::time::timeout(timeout, publisher.publish(record, timeout)).await {
            Ok(ack) => Ok(PublishMetadata::new(record.topic.clone(), ack?)),
            Err(_) => Err(TransportError::timeout("send_message", timeout.as_millis() as u64).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future;

    use kafka_mcp_error::KafkaMcpError;
    use serde_json::json;

    use super::*;
    use crate::core::message::types::RecordAck;

    struct FixedPublisher;

    impl MessagePublisher for FixedPublisher {
        async fn publish(&self, _record: &PublishRecord, _timeout: Duration) -> KafkaMcpResult<RecordAck> {
            Ok(RecordAck { partition: 2, offset: 41 })
        }

        fn close(&self) {}
    }

    struct StuckPublisher;

    impl MessagePublisher for StuckPublisher {
        async fn publish(&self, _record: &PublishRecord, _timeout: Duration) -> KafkaMcpResult<RecordAck> {
            future::pending().await
        }

        fn close(&self) {}
    }

    #[tokio::test]
    async fn test_send_returns_metadata() {
        let record = PublishRecord::json("orders", &json!({"id": 1}), None).unwrap();
        let metadata = MessageService::send(&FixedPublisher, &record, Duration::from_secs(10))
            .await
            .unwrap();
        assert_eq!(metadata.topic.as_str(), "orders");
        assert_eq!(metadata.partition, 2);
        assert_eq!(metadata.offset, 41);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_times_out() {
        let record = PublishRecord::json("orders", &json!(1), None).unwrap();
        let err = MessageService::send(&StuckPublisher, &record, Duration::from_secs(10))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            KafkaMcpError::Transport(TransportError::Timeout {
                operation: "send_message",
                timeout_ms: 10_000
            })
        ));
    }
}
