// Copyright 2023 The RocketMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod default_kafka_admin_ext;
pub mod kafka_admin_ext;

pub use default_kafka_admin_ext::DefaultKafkaAdminExt;
pub use default_kafka_admin_ext::DefaultKafkaProducer;
pub use default_kafka_admin_ext::KafkaClientFactory;
pub use kafka_admin_ext::ClientFactory;
pub use kafka_admin_ext::MessagePublisher;
pub use kafka_admin_ext::TopicAdmin;
