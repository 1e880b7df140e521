//! Snapshot-manager companion artifacts
//!
//! Every generated site ships a fixed snapshot-manager application that
//! archives the site database on demand. Its model and admin files do not
//! depend on the design, only on the site name.

use crate::VERSION;

/// Create the snapshot-manager model companion
pub fn snapshot_models(site_name: &str) -> String {
    format!(
        "# Generated by trackdat v{VERSION}
from django.db import models

import os
import shutil
from datetime import datetime

import {site_name}.settings as settings

from django.contrib.auth.decorators import login_required
from django.db import transaction
from django.db.models.signals import pre_delete
from django.dispatch import receiver
from django.http import HttpResponse, Http404


class Snapshot(models.Model):
    pdt_created_at = models.DateTimeField(auto_now_add=True, null=False)
    pdt_modified_at = models.DateTimeField(auto_now=True, null=False)
    snapshot_type = models.TextField(help_text='Created by whom?', max_length=6, default='manual',
                                     choices=(('auto', 'Automatic'), ('manual', 'Manual')), null=False, blank=False)
    name = models.TextField(help_text='Name of snapshot file', max_length=127, null=False, blank=False)
    reason = models.TextField(help_text='Reason for snapshot creation', max_length=127, null=False, blank=True,
                              default='Manually created')
    size = models.IntegerField(help_text='Size of database (in bytes)', null=False)

    def __str__(self):
        return self.snapshot_type + \" snapshot (\" + str(self.name) + \"; size: \" + str(self.size) + \" bytes)\"

    def save(self, *args, **kwargs):
        if not self.pk:
            with transaction.atomic():
                # Snapshots are copies of the site's SQLite database file
                name = \"snapshot-\" + str(datetime.utcnow()).replace(\" \", \"_\").replace(\":\", \"-\") + \".sqlite3\"

                shutil.copyfile(settings.DATABASES['default']['NAME'],
                                os.path.join(settings.BASE_DIR, \"snapshots\", name))

                self.name = name
                self.size = os.path.getsize(os.path.join(settings.BASE_DIR, \"snapshots\", name))

        super(Snapshot, self).save(*args, **kwargs)


@receiver(pre_delete, sender=Snapshot)
def delete_snapshot_file(sender, instance, **kwargs):
    try:
        os.remove(os.path.join(settings.BASE_DIR, \"snapshots\", instance.name))
    except OSError:
        print(\"Error deleting snapshot\")


@login_required
def download_view(request, id):
    try:
        snapshot = Snapshot.objects.get(pk=id)
        path = os.path.join(settings.BASE_DIR, 'snapshots', snapshot.name)
        if os.path.exists(path):
            with open(path, 'rb') as f:
                response = HttpResponse(f.read(), content_type='application/x-sqlite3')
                response['Content-Disposition'] = 'inline; filename=' + snapshot.name
                return response
        else:
            raise Http404('Snapshot file does not exist (database inconsistency!)')

    except Snapshot.DoesNotExist:
        raise Http404('Snapshot does not exist')
"
    )
}

/// Create the snapshot-manager admin companion
pub fn snapshot_admin() -> String {
    format!(
        "# Generated by trackdat v{VERSION}
from django.contrib import admin
from django.utils.html import format_html
from advanced_filters.admin import AdminAdvancedFiltersMixin

from snapshot_manager.models import *


@admin.register(Snapshot)
class SnapshotAdmin(admin.ModelAdmin):
    exclude = ('snapshot_type', 'size', 'name', 'reason')
    list_display = ('__str__', 'download_link', 'reason')

    def download_link(self, obj):
        return format_html('<a href=\"{{url}}\">Download Database Snapshot</a>',
                           url='/snapshots/' + str(obj.pk) + '/download/')

    download_link.short_description = 'Download Link'
"
    )
}
